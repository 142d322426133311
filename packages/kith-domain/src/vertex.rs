use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct UserVertex {
	pub username: String,
	pub given_name: Option<String>,
	pub family_name: Option<String>,
	pub verified: bool,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TagVertex {
	pub tagname: String,
	pub description: String,
	#[serde(with = "time::serde::rfc3339")]
	pub created: OffsetDateTime,
}

/// A directed User->Tag edge. At most one edge exists per (user, tag) pair;
/// equality and hashing follow that natural key.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserTagEdge {
	pub username: String,
	pub tagname: String,
	pub relevance: i64,
	pub story: String,
}
impl UserTagEdge {
	pub fn key(&self) -> (&str, &str) {
		(self.username.as_str(), self.tagname.as_str())
	}
}
impl PartialEq for UserTagEdge {
	fn eq(&self, other: &Self) -> bool {
		self.key() == other.key()
	}
}
impl Eq for UserTagEdge {}
impl Hash for UserTagEdge {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.key().hash(state);
	}
}

/// One traversal hit: an edge together with both vertex payloads.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TagHit {
	pub user: UserVertex,
	pub tag: TagVertex,
	pub edge: UserTagEdge,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn edge(username: &str, tagname: &str, relevance: i64) -> UserTagEdge {
		UserTagEdge {
			username: username.to_string(),
			tagname: tagname.to_string(),
			relevance,
			story: String::new(),
		}
	}

	#[test]
	fn edge_equality_ignores_weight_and_story() {
		let a = edge("alice", "cooking", 3);
		let mut b = edge("alice", "cooking", 9);

		b.story = "learned from grandma".to_string();

		assert_eq!(a, b);
	}

	#[test]
	fn edge_equality_requires_both_key_parts() {
		assert_ne!(edge("alice", "cooking", 3), edge("alice", "hiking", 3));
		assert_ne!(edge("alice", "cooking", 3), edge("bob", "cooking", 3));
	}
}
