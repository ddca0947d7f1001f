//! Matching functions for search parameters.
//!
//! Each function tests one candidate resource (as JSON) against one raw
//! query value and returns whether it matches. A missing field is always a
//! non-match. Paths are lists of object keys; arrays met along a path are
//! searched element-wise.

use serde_json::Value;

/// Collects every value reachable at `path`, flattening arrays on the way.
pub fn values_at<'a>(resource: &'a Value, path: &[&str]) -> Vec<&'a Value> {
    let mut current = vec![resource];
    for key in path {
        current = current
            .into_iter()
            .flat_map(|value| match value {
                Value::Array(items) => items.iter().filter_map(|i| i.get(*key)).collect(),
                other => other.get(*key).into_iter().collect::<Vec<_>>(),
            })
            .collect();
    }
    current
        .into_iter()
        .flat_map(|value| match value {
            Value::Array(items) => items.iter().collect(),
            other => vec![other],
        })
        .collect()
}

/// Strings reachable at `path`.
fn strings_at<'a>(resource: &'a Value, path: &[&str]) -> impl Iterator<Item = &'a str> {
    values_at(resource, path).into_iter().filter_map(Value::as_str)
}

/// Case-insensitive substring match against any `given` entry or the
/// `family` part of the HumanNames at `path`.
pub fn human_name_contains(resource: &Value, path: &[&str], query: &str) -> bool {
    let needle = query.to_lowercase();
    values_at(resource, path).into_iter().any(|name| {
        let given = strings_at(name, &["given"]);
        let family = name.get("family").and_then(Value::as_str);
        given
            .chain(family)
            .any(|part| part.to_lowercase().contains(&needle))
    })
}

/// Exact string equality against the value at `path`.
pub fn exact_equals(resource: &Value, path: &[&str], query: &str) -> bool {
    strings_at(resource, path).any(|value| value == query)
}

/// Exact equality against any `coding[].code` of the CodeableConcept(s) at `path`.
pub fn coding_code_equals(resource: &Value, path: &[&str], query: &str) -> bool {
    values_at(resource, path)
        .into_iter()
        .any(|concept| strings_at(concept, &["coding", "code"]).any(|code| code == query))
}

/// Exact equality between the Reference at `path` and `"<target>/<query>"`.
pub fn reference_equals(resource: &Value, path: &[&str], target: &str, query: &str) -> bool {
    let expected = format!("{}/{}", target, query);
    values_at(resource, path)
        .into_iter()
        .filter_map(|reference| reference.get("reference").and_then(Value::as_str))
        .any(|reference| reference == expected)
}

/// The timestamp at `path` starts with `query`, so `2024`, `2024-01` and
/// `2024-01-15` all match `2024-01-15T08:30:00Z`.
pub fn date_has_prefix(resource: &Value, path: &[&str], query: &str) -> bool {
    strings_at(resource, path).any(|value| value.starts_with(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn patient() -> Value {
        json!({
            "resourceType": "Patient",
            "name": [
                {"use": "official", "family": "Singhal", "given": ["Harsh"]},
                {"use": "nickname", "given": ["H", "Hars"]}
            ],
            "gender": "male",
            "birthDate": "1979-03-15"
        })
    }

    fn observation() -> Value {
        json!({
            "resourceType": "Observation",
            "category": [
                {"coding": [{"code": "vital-signs"}]},
                {"coding": [{"code": "survey"}, {"code": "exam"}]}
            ],
            "code": {"coding": [{"system": "http://loinc.org", "code": "85354-9"}]},
            "subject": {"reference": "Patient/patient-demo-001"},
            "effectiveDateTime": "2024-01-15T08:30:00Z"
        })
    }

    #[test]
    fn test_human_name_given_and_family() {
        let p = patient();
        assert!(human_name_contains(&p, &["name"], "harsh"));
        assert!(human_name_contains(&p, &["name"], "SING"));
        assert!(human_name_contains(&p, &["name"], "ghal"));
        assert!(!human_name_contains(&p, &["name"], "reed"));
    }

    #[test]
    fn test_human_name_missing_is_no_match() {
        let p = json!({"resourceType": "Patient"});
        assert!(!human_name_contains(&p, &["name"], "a"));
    }

    #[test]
    fn test_exact_equals() {
        let p = patient();
        assert!(exact_equals(&p, &["gender"], "male"));
        assert!(!exact_equals(&p, &["gender"], "Male"));
        assert!(exact_equals(&p, &["birthDate"], "1979-03-15"));
        assert!(!exact_equals(&p, &["birthDate"], "1979-03"));
        assert!(!exact_equals(&json!({}), &["gender"], "male"));
    }

    #[test]
    fn test_coding_code_single_concept() {
        let o = observation();
        assert!(coding_code_equals(&o, &["code"], "85354-9"));
        assert!(!coding_code_equals(&o, &["code"], "8480-6"));
    }

    #[test]
    fn test_coding_code_concept_array() {
        let o = observation();
        assert!(coding_code_equals(&o, &["category"], "vital-signs"));
        assert!(coding_code_equals(&o, &["category"], "exam"));
        assert!(!coding_code_equals(&o, &["category"], "laboratory"));
    }

    #[test]
    fn test_coding_code_without_coding() {
        let c = json!({"clinicalStatus": {"text": "active"}});
        assert!(!coding_code_equals(&c, &["clinicalStatus"], "active"));
    }

    #[test]
    fn test_reference_equals() {
        let o = observation();
        assert!(reference_equals(&o, &["subject"], "Patient", "patient-demo-001"));
        assert!(!reference_equals(&o, &["subject"], "Patient", "patient-demo"));
        assert!(!reference_equals(&o, &["subject"], "Group", "patient-demo-001"));
        assert!(!reference_equals(&json!({}), &["subject"], "Patient", "x"));
    }

    #[test]
    fn test_date_prefix() {
        let o = observation();
        assert!(date_has_prefix(&o, &["effectiveDateTime"], "2024"));
        assert!(date_has_prefix(&o, &["effectiveDateTime"], "2024-01"));
        assert!(date_has_prefix(&o, &["effectiveDateTime"], "2024-01-15"));
        assert!(!date_has_prefix(&o, &["effectiveDateTime"], "2023"));
        assert!(!date_has_prefix(&json!({}), &["effectiveDateTime"], "2024"));
    }

    #[test]
    fn test_values_at_flattens_arrays() {
        let o = observation();
        let codes: Vec<_> = values_at(&o, &["category", "coding", "code"])
            .into_iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(codes, vec!["vital-signs", "survey", "exam"]);
    }
}
