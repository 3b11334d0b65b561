//! Order-of-magnitude bands used to colour map points.

use crate::core::SpeakerCountRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeakerBand {
    /// No plotting value and no vitality override
    Unknown,
    /// Extinct or dormant
    Silent,
    UnderHundred,
    Hundreds,
    Thousands,
    TensOfThousands,
    Large,
}

impl SpeakerBand {
    pub fn of(record: &SpeakerCountRecord) -> Self {
        if record.has_vitality_override() {
            return Self::Silent;
        }
        record
            .plotting_value
            .map_or(Self::Unknown, Self::from_value)
    }

    pub fn from_value(speakers: f64) -> Self {
        match speakers {
            v if v < 100.0 => Self::UnderHundred,
            v if v < 1_000.0 => Self::Hundreds,
            v if v < 10_000.0 => Self::Thousands,
            v if v < 100_000.0 => Self::TensOfThousands,
            _ => Self::Large,
        }
    }

    /// Map marker colour name.
    #[must_use]
    pub const fn colour(&self) -> &'static str {
        match self {
            Self::Unknown => "gray",
            Self::Silent => "black",
            Self::UnderHundred => "green",
            Self::Hundreds => "yellow",
            Self::Thousands => "orange",
            Self::TensOfThousands => "red",
            Self::Large => "darkred",
        }
    }
}

impl fmt::Display for SpeakerBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unknown => "unknown",
            Self::Silent => "extinct/dormant",
            Self::UnderHundred => "<100",
            Self::Hundreds => "100-999",
            Self::Thousands => "1,000-9,999",
            Self::TensOfThousands => "10,000-99,999",
            Self::Large => "100,000+",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Provenance, VitalityStatus};

    #[test]
    fn test_band_edges() {
        assert_eq!(SpeakerBand::from_value(99.0), SpeakerBand::UnderHundred);
        assert_eq!(SpeakerBand::from_value(100.0), SpeakerBand::Hundreds);
        assert_eq!(SpeakerBand::from_value(9_999.0), SpeakerBand::Thousands);
        assert_eq!(SpeakerBand::from_value(10_000.0), SpeakerBand::TensOfThousands);
        assert_eq!(SpeakerBand::from_value(100_000.0), SpeakerBand::Large);
    }

    #[test]
    fn test_silent_beats_plotting_value() {
        let record = SpeakerCountRecord::new(None, Provenance::default(), Some(VitalityStatus::Extinct))
            .with_plotting_value(Some(0.5));
        assert_eq!(SpeakerBand::of(&record), SpeakerBand::Silent);
        assert_eq!(SpeakerBand::of(&record).colour(), "black");
    }

    #[test]
    fn test_missing_value_is_unknown() {
        let record = SpeakerCountRecord::new(None, Provenance::default(), Some(VitalityStatus::Living));
        assert_eq!(SpeakerBand::of(&record), SpeakerBand::Unknown);
        assert_eq!(SpeakerBand::Unknown.colour(), "gray");
    }
}
