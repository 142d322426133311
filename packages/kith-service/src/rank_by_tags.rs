use std::collections::BTreeSet;

use crate::{
	Error, RankService, Result,
	candidate::{self, CandidateSet, Contribution, RankedCandidate},
};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RankByTagsRequest {
	pub tagnames: Vec<String>,
	pub exclude_username: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RankByTagsResponse {
	pub candidates: Vec<RankedCandidate>,
}

impl RankService {
	/// Ranks users connected to any of the named tags by the sum of their
	/// edge relevances. Names matching no tag contribute nothing; they are
	/// not an error.
	pub async fn rank_by_tags(&self, req: RankByTagsRequest) -> Result<RankByTagsResponse> {
		let exclude_username = req.exclude_username.as_deref().map(str::trim);

		if exclude_username.is_some_and(str::is_empty) {
			return Err(Error::InvalidRequest {
				message: "exclude_username must not be empty when provided.".to_string(),
			});
		}

		// The request carries a set; a repeated name must not count an edge
		// twice.
		let tagnames = req
			.tagnames
			.iter()
			.map(|tagname| tagname.trim())
			.filter(|tagname| !tagname.is_empty())
			.map(str::to_string)
			.collect::<BTreeSet<_>>()
			.into_iter()
			.collect::<Vec<_>>();

		if tagnames.is_empty() {
			return Ok(RankByTagsResponse { candidates: Vec::new() });
		}

		let hits = self.source.edges_for_tags(&tagnames).await?;
		let mut set = CandidateSet::new();

		for hit in hits {
			if exclude_username == Some(hit.user.username.as_str()) {
				continue;
			}
			if !candidate::admits_candidate(&self.cfg.ranking, &hit.user) {
				continue;
			}

			let relevance = candidate::positive_relevance(&hit.edge)?;
			let contribution =
				Contribution { tag: hit.tag, edge: hit.edge, weight: relevance as f64 };

			set.push(hit.user, contribution)?;
		}

		let candidates = set.into_ranked();

		tracing::debug!(tags = tagnames.len(), candidates = candidates.len(), "Ranked by tags.");

		Ok(RankByTagsResponse { candidates })
	}
}
