//! Macroscopic and microscopic descriptor fields.
//!
//! The nine descriptor columns feed two derived fields: a human-readable
//! `description` and a machine-readable `dynamicProperties` JSON object.
//! Both walk [`DESCRIPTORS`] in order.

use crate::columns;
use crate::record::Record;

/// How one descriptor column is rendered.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    /// Source column.
    pub column: &'static str,
    /// Label used in `description`.
    pub label: &'static str,
    /// Key used in `dynamicProperties`.
    pub key: &'static str,
    /// Text closing the `description` clause.
    pub terminator: &'static str,
}

const fn descriptor(
    column: &'static str,
    label: &'static str,
    key: &'static str,
    terminator: &'static str,
) -> Descriptor {
    Descriptor {
        column,
        label,
        key,
        terminator,
    }
}

/// Descriptor columns in output order.
///
/// `context`, `hymenophore` and `micro` close without a trailing space;
/// published records depend on that exact text.
pub static DESCRIPTORS: [Descriptor; 9] = [
    descriptor(columns::HABIT, "Habit", "habit", ". "),
    descriptor(columns::ODOR, "Odor", "odor", ". "),
    descriptor(columns::TASTE, "Taste", "taste", ". "),
    descriptor(columns::SPOROCARP_FORM, "Sporocarp form", "sporocarpForm", ". "),
    descriptor(columns::PILEUS, "Pileus", "pileus", ". "),
    descriptor(columns::CONTEXT, "Context", "context", "."),
    descriptor(columns::HYMENOPHORE, "Hymenophore", "hymenophore", "."),
    descriptor(columns::STIPE, "Stipe", "stipe", ". "),
    descriptor(columns::MICRO, "Microscopic analysis", "microscopicAnalysis", "."),
];

/// Descriptors with a non-empty value in `record`, paired with that value.
fn present(record: &Record) -> impl Iterator<Item = (&'static Descriptor, &str)> {
    DESCRIPTORS.iter().filter_map(move |d| {
        let value = record.get(d.column);
        (!value.is_empty()).then_some((d, value))
    })
}

/// Derive `description`: one labelled clause per recorded descriptor.
pub fn description(record: &Record) -> String {
    present(record)
        .map(|(d, value)| format!("{}: {}{}", d.label, value, d.terminator))
        .collect()
}

/// Derive `dynamicProperties`: a compact JSON object of recorded
/// descriptors, or `""` when none are recorded.
///
/// Keys keep [`DESCRIPTORS`] order. Values are JSON-escaped so the result
/// always parses.
pub fn dynamic_properties(record: &Record) -> String {
    let members: Vec<String> = present(record)
        .map(|(d, value)| format!("\"{}\":{}", d.key, json_string(value)))
        .collect();

    if members.is_empty() {
        String::new()
    } else {
        format!("{{{}}}", members.join(","))
    }
}

fn json_string(value: &str) -> String {
    serde_json::to_string(value).expect("string serialization is infallible")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        Record::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn description_empty_without_descriptors() {
        let r = record(&[("habit", ""), ("odor", ""), ("micro", "")]);
        assert_eq!(description(&r), "");
    }

    #[test]
    fn description_single_clause() {
        let r = record(&[("habit", "resupinate")]);
        assert_eq!(description(&r), "Habit: resupinate. ");
    }

    #[test]
    fn description_keeps_fixed_order_and_terminators() {
        let r = record(&[
            ("micro", "spores 5-7 um"),
            ("stipe", "central"),
            ("context", "white"),
            ("hymenophore", "poroid"),
            ("sporocarp form", "bracket"),
        ]);
        assert_eq!(
            description(&r),
            "Sporocarp form: bracket. Context: white.Hymenophore: poroid.Stipe: central. Microscopic analysis: spores 5-7 um."
        );
    }

    #[test]
    fn dynamic_properties_empty_without_descriptors() {
        let r = record(&[("habit", ""), ("pileus", "")]);
        assert_eq!(dynamic_properties(&r), "");
    }

    #[test]
    fn dynamic_properties_single_key() {
        let r = record(&[("habit", "resupinate")]);
        assert_eq!(dynamic_properties(&r), r#"{"habit":"resupinate"}"#);
    }

    #[test]
    fn dynamic_properties_uses_camel_case_keys_without_trailing_comma() {
        let r = record(&[
            ("habit", "gregarious"),
            ("sporocarp form", "stipitate"),
            ("micro", "clamps present"),
        ]);
        let json = dynamic_properties(&r);
        assert_eq!(
            json,
            r#"{"habit":"gregarious","sporocarpForm":"stipitate","microscopicAnalysis":"clamps present"}"#
        );
        assert!(!json.contains(",}"));
    }

    #[test]
    fn dynamic_properties_is_valid_json_with_quotes() {
        let r = record(&[("odor", r#"like "anise""#), ("taste", r"bitter\mild")]);
        let json = dynamic_properties(&r);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["odor"], r#"like "anise""#);
        assert_eq!(parsed["taste"], r"bitter\mild");
    }

    #[test]
    fn all_descriptor_keys_parse() {
        let pairs: Vec<(&str, &str)> = DESCRIPTORS.iter().map(|d| (d.column, "x")).collect();
        let r = record(&pairs);
        let parsed: serde_json::Value = serde_json::from_str(&dynamic_properties(&r)).unwrap();
        let object = parsed.as_object().unwrap();
        assert_eq!(object.len(), 9);
        assert!(object.contains_key("microscopicAnalysis"));
    }
}
