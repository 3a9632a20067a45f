// Patch Values
//
// Loosely-typed values carried by a patch request, and the conversions
// each record schema uses to turn them into concrete field types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single value in a patch request.
///
/// Front-ends that only collect strings can send `Text` for any field:
/// numeric fields parse it, list fields split it on commas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Integer(i64),
    Decimal(f64),
    Text(String),
    List(Vec<String>),
}

/// Errors produced when a value does not fit the target field.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("expected {expected}, got {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("cannot read `{input}` as {expected}")]
    Unparsable {
        expected: &'static str,
        input: String,
    },
}

impl FieldValue {
    fn shape(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Integer(_) => "integer",
            FieldValue::Decimal(_) => "decimal",
            FieldValue::Text(_) => "text",
            FieldValue::List(_) => "list",
        }
    }

    fn mismatch(&self, expected: &'static str) -> ValueError {
        ValueError::Mismatch {
            expected,
            found: self.shape(),
        }
    }

    pub fn into_text(self) -> Result<String, ValueError> {
        match self {
            FieldValue::Text(text) => Ok(text),
            FieldValue::Integer(n) => Ok(n.to_string()),
            FieldValue::Decimal(n) => Ok(n.to_string()),
            other => Err(other.mismatch("text")),
        }
    }

    /// `Null` and the empty string both clear the field.
    pub fn into_optional_text(self) -> Result<Option<String>, ValueError> {
        match self {
            FieldValue::Null => Ok(None),
            FieldValue::Text(text) if text.trim().is_empty() => Ok(None),
            other => other.into_text().map(Some),
        }
    }

    /// Only finite numbers are accepted; `NaN` and infinities have no JSON form.
    pub fn into_decimal(self) -> Result<f64, ValueError> {
        const EXPECTED: &str = "finite decimal";
        let (n, input) = match self {
            FieldValue::Decimal(n) => (n, None),
            FieldValue::Integer(n) => return Ok(n as f64),
            FieldValue::Text(text) => match text.trim().parse::<f64>() {
                Ok(n) => (n, Some(text)),
                Err(_) => {
                    return Err(ValueError::Unparsable {
                        expected: EXPECTED,
                        input: text,
                    })
                }
            },
            other => return Err(other.mismatch(EXPECTED)),
        };

        if n.is_finite() {
            Ok(n)
        } else {
            Err(ValueError::Unparsable {
                expected: EXPECTED,
                input: input.unwrap_or_else(|| n.to_string()),
            })
        }
    }

    /// Decimals are accepted when they hold a whole number, e.g. `250.0`.
    pub fn into_count(self) -> Result<u32, ValueError> {
        const EXPECTED: &str = "non-negative integer";
        match self {
            FieldValue::Integer(n) => u32::try_from(n).map_err(|_| ValueError::Unparsable {
                expected: EXPECTED,
                input: n.to_string(),
            }),
            FieldValue::Decimal(n) => {
                if n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n) {
                    Ok(n as u32)
                } else {
                    Err(ValueError::Unparsable {
                        expected: EXPECTED,
                        input: n.to_string(),
                    })
                }
            }
            FieldValue::Text(text) => {
                text.trim()
                    .parse::<u32>()
                    .map_err(|_| ValueError::Unparsable {
                        expected: EXPECTED,
                        input: text,
                    })
            }
            other => Err(other.mismatch(EXPECTED)),
        }
    }

    pub fn into_optional_count(self) -> Result<Option<u32>, ValueError> {
        match self {
            FieldValue::Null => Ok(None),
            FieldValue::Text(text) if text.trim().is_empty() => Ok(None),
            other => other.into_count().map(Some),
        }
    }

    /// Text is split on commas; blank entries are dropped.
    pub fn into_list(self) -> Result<Vec<String>, ValueError> {
        match self {
            FieldValue::List(items) => Ok(items),
            FieldValue::Text(text) => Ok(text
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect()),
            other => Err(other.mismatch("list")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Decimal(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// A partial update: field name to new value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patch {
    updates: BTreeMap<String, FieldValue>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. A later value for the same field wins.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.updates.insert(field.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.updates.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.updates.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Patch {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut patch = Patch::new();
        for (field, value) in iter {
            patch.insert(field, value);
        }
        patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_parses_into_numbers() {
        assert_eq!(FieldValue::from(" 42 ").into_count().unwrap(), 42);
        assert_eq!(FieldValue::from("1500.5").into_decimal().unwrap(), 1500.5);
        assert_eq!(FieldValue::Integer(7).into_decimal().unwrap(), 7.0);
    }

    #[test]
    fn negative_count_is_rejected() {
        let err = FieldValue::Integer(-3).into_count().unwrap_err();
        assert!(matches!(err, ValueError::Unparsable { .. }));

        let err = FieldValue::from("abc").into_count().unwrap_err();
        assert_eq!(err.to_string(), "cannot read `abc` as non-negative integer");
    }

    #[test]
    fn non_finite_decimals_are_rejected() {
        for input in ["NaN", "inf", "-infinity"] {
            let err = FieldValue::from(input).into_decimal().unwrap_err();
            assert_eq!(
                err,
                ValueError::Unparsable {
                    expected: "finite decimal",
                    input: input.to_string(),
                }
            );
        }
        assert!(FieldValue::Decimal(f64::NAN).into_decimal().is_err());
        assert!(FieldValue::Decimal(f64::INFINITY).into_decimal().is_err());
        assert_eq!(FieldValue::Decimal(-12.5).into_decimal().unwrap(), -12.5);
    }

    #[test]
    fn whole_decimals_count() {
        assert_eq!(FieldValue::Decimal(250.0).into_count().unwrap(), 250);
        assert_eq!(FieldValue::Decimal(0.0).into_optional_count().unwrap(), Some(0));

        for bad in [2.5, -1.0, f64::NAN, 5e10] {
            let err = FieldValue::Decimal(bad).into_count().unwrap_err();
            assert!(matches!(err, ValueError::Unparsable { .. }), "{bad}");
        }
    }

    #[test]
    fn list_accepts_comma_separated_text() {
        let list = FieldValue::from("Ann, Bob,,  Cy ").into_list().unwrap();
        assert_eq!(list, vec!["Ann", "Bob", "Cy"]);
    }

    #[test]
    fn blank_text_clears_optional_fields() {
        assert_eq!(FieldValue::from("").into_optional_text().unwrap(), None);
        assert_eq!(FieldValue::Null.into_optional_count().unwrap(), None);
        assert_eq!(
            FieldValue::from("M1").into_optional_text().unwrap(),
            Some("M1".to_string())
        );
    }

    #[test]
    fn list_is_not_text() {
        let err = FieldValue::List(vec!["a".into()]).into_text().unwrap_err();
        assert_eq!(
            err,
            ValueError::Mismatch {
                expected: "text",
                found: "list"
            }
        );
    }

    #[test]
    fn patch_deserializes_from_json_object() {
        let patch: Patch =
            serde_json::from_str(r#"{"name": "Ann B", "age": 31, "manager_id": null}"#).unwrap();

        let collected: Vec<_> = patch.iter().collect();
        assert_eq!(
            collected,
            vec![
                ("age", &FieldValue::Integer(31)),
                ("manager_id", &FieldValue::Null),
                ("name", &FieldValue::Text("Ann B".into())),
            ]
        );
    }
}
