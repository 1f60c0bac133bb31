//! Numeric datasets read from JSON for class-break computation.
//!
//! Three shapes are accepted:
//!
//! - an array of numbers: `[1, 2, 3]`
//! - an array of objects, with a key naming the numeric field:
//!   `[{"pop": 12}, {"pop": 40}]`
//! - an object whose values are numbers: `{"a": 1, "b": 2}`
//!
//! `null` entries are skipped.

use serde_json::Value;
use std::path::Path;

use crate::error::SwatchError;

pub fn load(path: &Path, key: Option<&str>) -> Result<Vec<f64>, SwatchError> {
    let content = std::fs::read_to_string(path)?;
    let values = parse(&content, key)?;
    tracing::debug!(path = %path.display(), count = values.len(), "Loaded dataset");
    Ok(values)
}

pub fn parse(json: &str, key: Option<&str>) -> Result<Vec<f64>, SwatchError> {
    let value: Value = serde_json::from_str(json)?;
    match (value, key) {
        (Value::Array(items), None) => numbers(items.iter(), "array entry"),
        (Value::Array(items), Some(key)) => {
            let fields = items
                .iter()
                .map(|item| match item {
                    Value::Object(map) => map.get(key).ok_or_else(|| {
                        SwatchError::Dataset(format!("object without key {key:?}"))
                    }),
                    other => Err(SwatchError::Dataset(format!(
                        "expected an object with key {key:?}, got {other}"
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            numbers(fields.into_iter(), "field")
        }
        (Value::Object(map), _) => numbers(map.values(), "object value"),
        (other, _) => Err(SwatchError::Dataset(format!(
            "expected an array or object, got {other}"
        ))),
    }
}

fn numbers<'a>(
    values: impl Iterator<Item = &'a Value>,
    what: &str,
) -> Result<Vec<f64>, SwatchError> {
    values
        .filter(|v| !v.is_null())
        .map(|v| {
            v.as_f64()
                .ok_or_else(|| SwatchError::Dataset(format!("{what} {v} is not a number")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_of_numbers() {
        assert_eq!(parse("[3, 1.5, null, -2]", None).unwrap(), [3.0, 1.5, -2.0]);
    }

    #[test]
    fn test_array_of_objects() {
        let json = r#"[{"name": "a", "pop": 12}, {"name": "b", "pop": 40}]"#;
        assert_eq!(parse(json, Some("pop")).unwrap(), [12.0, 40.0]);
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let json = r#"[{"pop": 12}, {"people": 40}]"#;
        let err = parse(json, Some("pop")).unwrap_err();
        assert!(matches!(err, SwatchError::Dataset(_)), "{err}");
    }

    #[test]
    fn test_object_of_numbers() {
        let values = parse(r#"{"a": 1, "b": 2}"#, None).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values.iter().sum::<f64>(), 3.0);
    }

    #[test]
    fn test_rejects_strings_and_scalars() {
        assert!(matches!(
            parse(r#"[1, "two"]"#, None),
            Err(SwatchError::Dataset(_))
        ));
        assert!(matches!(parse("42", None), Err(SwatchError::Dataset(_))));
        assert!(matches!(parse("[1,", None), Err(SwatchError::Json(_))));
    }
}
