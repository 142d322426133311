use kith_domain::scoring;

use crate::{
	Error, RankService, Result,
	candidate::{self, CandidateSet, Contribution, RankedCandidate},
};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RankBySharedTagsRequest {
	pub username: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RankBySharedTagsResponse {
	pub candidates: Vec<RankedCandidate>,
}

impl RankService {
	/// Ranks users by the tags they share with the reference user. Each
	/// shared tag contributes the geometric mean of the two edge weights; a
	/// candidate's score is the sum over its shared tags. An unknown
	/// reference user reads as one with no edges and yields an empty result.
	pub async fn rank_by_shared_tags(
		&self,
		req: RankBySharedTagsRequest,
	) -> Result<RankBySharedTagsResponse> {
		let username = req.username.trim();

		if username.is_empty() {
			return Err(Error::InvalidRequest { message: "username is required.".to_string() });
		}

		// Hop 1: the reference user's own edges.
		let own_hits = self.source.edges_for_user(username).await?;
		let mut own_weights: Vec<(String, i64)> = Vec::with_capacity(own_hits.len());

		for hit in &own_hits {
			let relevance = candidate::positive_relevance(&hit.edge)?;

			if own_weights.iter().any(|(tagname, _)| tagname == &hit.tag.tagname) {
				return Err(Error::DataCorruption {
					message: format!(
						"duplicate edge for one (user, tag) pair; username={username} tagname={}",
						hit.tag.tagname
					),
				});
			}

			own_weights.push((hit.tag.tagname.clone(), relevance));
		}

		// Hop 2, one traversal per shared tag. Issued sequentially;
		// aggregation and sort are order-independent over the collected
		// edges, so fan-out would rank identically.
		let mut set = CandidateSet::new();

		for (tagname, own_relevance) in &own_weights {
			let shared = self.source.edges_for_tag_excluding_user(tagname, username).await?;

			for hit in shared {
				if hit.user.username == username {
					continue;
				}
				if !candidate::admits_candidate(&self.cfg.ranking, &hit.user) {
					continue;
				}

				let relevance = candidate::positive_relevance(&hit.edge)?;
				let weight = scoring::pair_weight(*own_relevance, relevance);

				set.push(hit.user, Contribution { tag: hit.tag, edge: hit.edge, weight })?;
			}
		}

		let candidates = set.into_ranked();

		tracing::debug!(username, candidates = candidates.len(), "Ranked by shared tags.");

		Ok(RankBySharedTagsResponse { candidates })
	}
}
