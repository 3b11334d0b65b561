use crate::classifier::Classifier;
use crate::config::load_config;
use anyhow::Result;

pub fn classify_text(text: &str, verbosity: u8) -> Result<()> {
    let classifier = Classifier::new(load_config().classifier_config());
    print!("{}", describe(&classifier, text, verbosity));
    Ok(())
}

fn field<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// One `key: value` line per classification field.
pub fn describe(classifier: &Classifier, text: &str, verbosity: u8) -> String {
    let (rule, c) = classifier.classify_traced(Some(text));

    let mut out = String::new();
    out.push_str(&format!("category: {}\n", c.category));
    out.push_str(&format!("point: {}\n", field(c.point)));
    out.push_str(&format!("min: {}\n", field(c.min)));
    out.push_str(&format!("max: {}\n", field(c.max)));
    out.push_str(&format!("cited_year: {}\n", field(c.cited_year)));
    if verbosity > 0 {
        out.push_str(&format!("rule: {}\n", field(rule)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_describe_qualitative_range() {
        let text = describe(&Classifier::default(), "fewer than a few hundred", 1);
        assert_eq!(
            text,
            indoc! {"
                category: qualitative_range
                point: -
                min: 0
                max: 300
                cited_year: -
                rule: multiplier
            "}
        );
    }

    #[test]
    fn test_describe_hides_rule_without_verbosity() {
        let text = describe(&Classifier::default(), "unknown", 0);
        assert!(text.starts_with("category: error\n"));
        assert!(!text.contains("rule:"));
    }
}
