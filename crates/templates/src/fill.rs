//! `{variable}` placeholder substitution.
//!
//! A placeholder is `{` + one or more ASCII letters, digits, or underscores
//! + `}`. Anything else between braces is left alone. Substitution is a
//! single left-to-right pass, so a substituted value is never re-scanned.

use std::collections::BTreeMap;

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

enum Segment<'t> {
    Text(&'t str),
    Placeholder(&'t str),
}

/// Split `template` into literal runs and placeholder names, in order.
fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push(Segment::Text(&rest[..open]));
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_placeholder_name(&after[..close]) => {
                out.push(Segment::Placeholder(&after[..close]));
                rest = &after[close + 1..];
            }
            _ => {
                out.push(Segment::Text("{"));
                rest = after;
            }
        }
    }
    out.push(Segment::Text(rest));
    out
}

/// Replace every `{name}` that has an entry in `values`.
///
/// Placeholders without a value are kept verbatim.
pub fn fill(template: &str, values: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in segments(template) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Placeholder(name) => match values.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            },
        }
    }
    out
}

/// Distinct placeholder names in first-appearance order.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for segment in segments(template) {
        if let Segment::Placeholder(name) = segment {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_every_occurrence() {
        let filled = fill("{a} and {a} then {b}", &values(&[("a", "x"), ("b", "y")]));
        assert_eq!(filled, "x and x then y");
    }

    #[test]
    fn missing_values_stay_verbatim() {
        let filled = fill("Write about {topic} for {audience}.", &values(&[("topic", "tides")]));
        assert_eq!(filled, "Write about tides for {audience}.");
    }

    #[test]
    fn values_are_not_rescanned() {
        let filled = fill("{a}-{b}", &values(&[("a", "{b}"), ("b", "z")]));
        assert_eq!(filled, "{b}-z");
    }

    #[test]
    fn non_placeholder_braces_untouched() {
        let template = "json: { \"k\": 1 } and {} and {open";
        assert_eq!(fill(template, &values(&[("k", "v")])), template);
        assert!(placeholders(template).is_empty());
    }

    #[test]
    fn placeholders_in_first_appearance_order() {
        assert_eq!(
            placeholders("{industry} {goals} {industry} {timeline}"),
            vec!["industry", "goals", "timeline"]
        );
    }
}
