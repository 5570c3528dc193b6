//! Mentions snapshot parsing.
//!
//! A snapshot looks like
//! `{"value": {"@alice": {"mentions": {"#general": 3}, "#general": 3}}}`.
//! The weight of each mention is repeated as a flat entry on the record;
//! the flat entry wins when both are present.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::error::GraphError;

const MENTIONS_KEY: &str = "mentions";

/// Source identifier to its mention record, in a stable order.
pub type MentionsMap = BTreeMap<String, MentionRecord>;

/// Everything one source mentions, with resolved weights.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MentionRecord {
	/// Target identifier to mention weight.
	pub mentions: BTreeMap<String, f64>,
}

impl MentionRecord {
	/// Build a record from `(target, weight)` pairs.
	pub fn new<K: Into<String>>(mentions: impl IntoIterator<Item = (K, f64)>) -> Self {
		Self {
			mentions: mentions
				.into_iter()
				.map(|(target, weight)| (target.into(), weight))
				.collect(),
		}
	}

	fn from_value(entity: &str, value: &Value) -> Result<Self, GraphError> {
		let Value::Object(fields) = value else {
			return Err(GraphError::MalformedRecord {
				entity: entity.to_owned(),
			});
		};
		let Some(Value::Object(mentions)) = fields.get(MENTIONS_KEY) else {
			return Err(GraphError::MissingMentions {
				entity: entity.to_owned(),
			});
		};

		let mut resolved = BTreeMap::new();
		for (target, mention) in mentions {
			let flat = if target == MENTIONS_KEY {
				None
			} else {
				fields.get(target)
			};
			let weight = flat
				.unwrap_or(mention)
				.as_f64()
				.ok_or_else(|| GraphError::invalid_weight(entity, target))?;
			resolved.insert(target.clone(), weight);
		}
		Ok(Self { mentions: resolved })
	}
}

#[derive(Deserialize)]
struct RawSnapshot {
	value: BTreeMap<String, Value>,
}

/// Parse a JSON snapshot into a [`MentionsMap`].
pub fn parse_snapshot(json: &str) -> Result<MentionsMap, GraphError> {
	let raw: RawSnapshot = serde_json::from_str(json)?;
	let mut map = MentionsMap::new();
	for (entity, record) in &raw.value {
		map.insert(entity.clone(), MentionRecord::from_value(entity, record)?);
	}
	Ok(map)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_records() {
		let map = parse_snapshot(
			r##"{"value": {
				"@alice": {"mentions": {"#general": 3, "@bob": 1}, "#general": 3, "@bob": 1},
				"#general": {"mentions": {}}
			}}"##,
		)
		.unwrap();

		assert_eq!(map.len(), 2);
		assert_eq!(
			map["@alice"],
			MentionRecord::new([("#general", 3.0), ("@bob", 1.0)])
		);
		assert!(map["#general"].mentions.is_empty());
	}

	#[test]
	fn flat_weight_takes_precedence() {
		let map = parse_snapshot(
			r##"{"value": {"@alice": {"mentions": {"#general": 1}, "#general": 4}}}"##,
		)
		.unwrap();
		assert_eq!(map["@alice"].mentions["#general"], 4.0);
	}

	#[test]
	fn falls_back_to_mentions_weight() {
		let map =
			parse_snapshot(r##"{"value": {"@alice": {"mentions": {"#general": 2.5}}}}"##).unwrap();
		assert_eq!(map["@alice"].mentions["#general"], 2.5);
	}

	#[test]
	fn missing_mentions_is_reported() {
		let err = parse_snapshot(r##"{"value": {"@alice": {"#general": 2}}}"##).unwrap_err();
		assert!(matches!(err, GraphError::MissingMentions { entity } if entity == "@alice"));
	}

	#[test]
	fn non_numeric_weight_is_reported() {
		let err = parse_snapshot(
			r##"{"value": {"@alice": {"mentions": {"#general": 1}, "#general": "lots"}}}"##,
		)
		.unwrap_err();
		assert!(matches!(
			err,
			GraphError::InvalidWeight { entity, target } if entity == "@alice" && target == "#general"
		));
	}

	#[test]
	fn non_object_record_is_reported() {
		let err = parse_snapshot(r##"{"value": {"@alice": 7}}"##).unwrap_err();
		assert!(matches!(err, GraphError::MalformedRecord { .. }));
	}

	#[test]
	fn missing_value_is_a_parse_error() {
		assert!(matches!(
			parse_snapshot(r#"{"data": {}}"#),
			Err(GraphError::Parse(_))
		));
		assert!(parse_snapshot(r#"{"value": {}}"#).unwrap().is_empty());
	}
}
