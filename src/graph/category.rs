//! Node categories, keyed by the leading sigil of an identifier.

use std::fmt;

use super::error::GraphError;

/// The four kinds of entity that can mention or be mentioned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
	/// `@` identifiers
	User,
	/// `#` identifiers
	Channel,
	/// `&` identifiers
	File,
	/// `%` identifiers
	Message,
}

impl Category {
	/// Every category, in legend order.
	pub const ALL: [Category; 4] = [
		Category::User,
		Category::Channel,
		Category::File,
		Category::Message,
	];

	/// Look up the category for a sigil character.
	pub fn from_sigil(sigil: char) -> Option<Self> {
		match sigil {
			'@' => Some(Category::User),
			'#' => Some(Category::Channel),
			'&' => Some(Category::File),
			'%' => Some(Category::Message),
			_ => None,
		}
	}

	/// Resolve the category of an identifier from its first character.
	pub fn of(identifier: &str) -> Result<Self, GraphError> {
		let sigil = identifier
			.chars()
			.next()
			.ok_or(GraphError::EmptyIdentifier)?;
		Self::from_sigil(sigil).ok_or_else(|| GraphError::unknown_sigil(identifier, sigil))
	}

	/// The sigil that introduces identifiers of this category.
	pub fn sigil(self) -> char {
		match self {
			Category::User => '@',
			Category::Channel => '#',
			Category::File => '&',
			Category::Message => '%',
		}
	}

	/// Lowercase display name, as shown in the legend.
	pub fn name(self) -> &'static str {
		match self {
			Category::User => "user",
			Category::Channel => "channel",
			Category::File => "file",
			Category::Message => "message",
		}
	}

	/// Palette colour for nodes of this category.
	pub fn color(self) -> &'static str {
		match self {
			Category::User => "#7aa456",
			Category::Channel => "#c65999",
			Category::File => "#c96d44",
			Category::Message => "#777acd",
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
