use crate::utils::error::{ReliquaryError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One raw query result. Only `kind` is interpreted here; every other
/// attribute is handed through to the item constructors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    pub fn new(data: HashMap<String, serde_json::Value>) -> Self {
        Self { data }
    }

    /// The textual kind of this record; `None` when absent or not a string.
    pub fn kind(&self) -> Option<&str> {
        self.data.get("kind").and_then(|v| v.as_str())
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.data
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

impl From<serde_json::Value> for Record {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(obj) => Self {
                data: obj.into_iter().collect(),
            },
            // 非物件元素視為沒有 kind 的空紀錄
            _ => Self::default(),
        }
    }
}

/// Parses a query batch: `null` means no batch, an array is one record per element.
pub fn parse_batch(bytes: &[u8]) -> Result<Option<Vec<Record>>> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Array(items) => Ok(Some(items.into_iter().map(Record::from).collect())),
        other => Err(ReliquaryError::ProcessingError {
            message: format!(
                "expected a JSON array of records or null, found {}",
                json_type_name(&other)
            ),
        }),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_reads_only_the_kind_attribute() {
        let record = Record::from(json!({"kind": "Relic", "type": "Mod"}));
        assert_eq!(record.kind(), Some("Relic"));

        assert_eq!(Record::from(json!({"type": "Prime Part"})).kind(), None);
        assert_eq!(Record::from(json!({"kind": 7, "type": "Relic"})).kind(), None);
    }

    #[test]
    fn test_kind_missing_or_not_a_string() {
        assert_eq!(Record::from(json!({"name": "Axi A1"})).kind(), None);
        assert_eq!(Record::from(json!({"kind": 3})).kind(), None);
        assert_eq!(Record::from(json!("Relic")).kind(), None);
    }

    #[test]
    fn test_parse_batch_null_and_array() {
        assert_eq!(parse_batch(b"null").unwrap(), None);

        let batch = parse_batch(br#"[{"kind": "Relic", "name": "Axi A1"}, 42]"#)
            .unwrap()
            .unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].kind(), Some("Relic"));
        assert!(batch[1].data.is_empty());
    }

    #[test]
    fn test_parse_batch_rejects_other_shapes() {
        let err = parse_batch(br#"{"kind": "Relic"}"#).unwrap_err();
        assert!(err.to_string().contains("an object"));

        assert!(matches!(
            parse_batch(b"not json"),
            Err(ReliquaryError::SerializationError(_))
        ));
    }

    #[test]
    fn test_record_deserializes_transparently() {
        let record: Record = serde_json::from_str(r#"{"kind": "Relic", "vaulted": true}"#).unwrap();
        assert_eq!(record.data.get("vaulted"), Some(&json!(true)));
        assert_eq!(record.to_value(), json!({"kind": "Relic", "vaulted": true}));
    }
}
