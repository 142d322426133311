use time::OffsetDateTime;

use kith_domain::{TagHit, TagVertex, UserTagEdge, UserVertex};

/// One edge row joined to both of its vertex payloads.
#[derive(Debug, sqlx::FromRow)]
pub struct TagHitRow {
	pub username: String,
	pub given_name: Option<String>,
	pub family_name: Option<String>,
	pub verified: bool,
	pub tagname: String,
	pub description: String,
	pub tag_created_at: OffsetDateTime,
	pub relevance: i64,
	pub story: String,
}
impl From<TagHitRow> for TagHit {
	fn from(row: TagHitRow) -> Self {
		Self {
			user: UserVertex {
				username: row.username.clone(),
				given_name: row.given_name,
				family_name: row.family_name,
				verified: row.verified,
			},
			tag: TagVertex {
				tagname: row.tagname.clone(),
				description: row.description,
				created: row.tag_created_at,
			},
			edge: UserTagEdge {
				username: row.username,
				tagname: row.tagname,
				relevance: row.relevance,
				story: row.story,
			},
		}
	}
}
