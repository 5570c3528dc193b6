//! Errors raised while turning a mentions snapshot into a graph.

use thiserror::Error;

/// Construction-time defects in the mentions data.
#[derive(Debug, Error)]
pub enum GraphError {
	/// The identifier's leading character maps to no known category.
	#[error("unknown category sigil {sigil:?} in identifier {identifier:?}")]
	UnknownSigil {
		/// Offending identifier
		identifier: String,
		/// Its first character
		sigil: char,
	},

	/// An identifier with no characters, so no sigil to look up.
	#[error("empty identifier")]
	EmptyIdentifier,

	/// A source record that is not a JSON object.
	#[error("record for {entity:?} is not an object")]
	MalformedRecord {
		/// Source identifier of the record
		entity: String,
	},

	/// A source record without a `mentions` object.
	#[error("record for {entity:?} has no mentions mapping")]
	MissingMentions {
		/// Source identifier of the record
		entity: String,
	},

	/// A mention weight that is not a finite number.
	#[error("invalid weight for mention {entity:?} -> {target:?}")]
	InvalidWeight {
		/// Source identifier
		entity: String,
		/// Target identifier
		target: String,
	},

	/// The snapshot is not valid JSON or lacks the `value` mapping.
	#[error("invalid mentions snapshot: {0}")]
	Parse(#[from] serde_json::Error),
}

impl GraphError {
	/// Create an UnknownSigil error.
	pub fn unknown_sigil(identifier: impl Into<String>, sigil: char) -> Self {
		Self::UnknownSigil {
			identifier: identifier.into(),
			sigil,
		}
	}

	/// Create an InvalidWeight error.
	pub fn invalid_weight(entity: impl Into<String>, target: impl Into<String>) -> Self {
		Self::InvalidWeight {
			entity: entity.into(),
			target: target.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_name_the_offending_identifier() {
		let err = GraphError::unknown_sigil("!oops", '!');
		assert_eq!(
			err.to_string(),
			"unknown category sigil '!' in identifier \"!oops\""
		);

		let err = GraphError::invalid_weight("@alice", "#general");
		assert!(err.to_string().contains("@alice"));
		assert!(err.to_string().contains("#general"));
	}

	#[test]
	fn json_errors_convert() {
		let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		let err: GraphError = json_err.into();
		assert!(matches!(err, GraphError::Parse(_)));
	}
}
