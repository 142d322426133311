use kith_domain::TagVertex;

use crate::{Error, RankService, Result, candidate};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TagListRequest {
	pub username: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TagListItem {
	pub tag: TagVertex,
	pub relevance: i64,
	pub story: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TagListResponse {
	pub items: Vec<TagListItem>,
}

impl RankService {
	/// Lists a user's own tags, strongest interest first, tagname ascending
	/// on equal relevance.
	pub async fn list_tags(&self, req: TagListRequest) -> Result<TagListResponse> {
		let username = req.username.trim();

		if username.is_empty() {
			return Err(Error::InvalidRequest { message: "username is required.".to_string() });
		}

		let hits = self.source.edges_for_user(username).await?;
		let mut items = Vec::with_capacity(hits.len());

		for hit in hits {
			let relevance = candidate::positive_relevance(&hit.edge)?;

			if items.iter().any(|item: &TagListItem| item.tag.tagname == hit.tag.tagname) {
				return Err(Error::DataCorruption {
					message: format!(
						"duplicate edge for one (user, tag) pair; username={username} tagname={}",
						hit.tag.tagname
					),
				});
			}

			items.push(TagListItem { tag: hit.tag, relevance, story: hit.edge.story });
		}

		items.sort_by(|left, right| {
			right
				.relevance
				.cmp(&left.relevance)
				.then_with(|| left.tag.tagname.cmp(&right.tag.tagname))
		});

		Ok(TagListResponse { items })
	}
}
