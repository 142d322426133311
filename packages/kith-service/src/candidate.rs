use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use kith_domain::{TagVertex, UserTagEdge, UserVertex, scoring};

use crate::{Error, Result};

/// One ranked candidate with full provenance: `tags[i]` and `user_tags[i]`
/// are the tag and edge behind the i-th contribution, ordered by contribution
/// weight descending then tagname ascending.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RankedCandidate {
	pub user: UserVertex,
	pub score: f64,
	pub tags: Vec<TagVertex>,
	pub user_tags: Vec<UserTagEdge>,
}

pub(crate) struct Contribution {
	pub(crate) tag: TagVertex,
	pub(crate) edge: UserTagEdge,
	pub(crate) weight: f64,
}

#[derive(Default)]
pub(crate) struct CandidateSet {
	by_user: HashMap<String, (UserVertex, Vec<Contribution>)>,
}
impl CandidateSet {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn push(&mut self, user: UserVertex, contribution: Contribution) -> Result<()> {
		let (_, contributions) =
			self.by_user.entry(user.username.clone()).or_insert_with(|| (user, Vec::new()));

		// Edge equality is by (user, tag); a second hit for the pair means the
		// store has violated the natural-key invariant.
		if contributions.iter().any(|existing| existing.edge == contribution.edge) {
			return Err(Error::DataCorruption {
				message: format!(
					"duplicate edge for one (user, tag) pair; username={} tagname={}",
					contribution.edge.username, contribution.edge.tagname
				),
			});
		}

		contributions.push(contribution);

		Ok(())
	}

	pub(crate) fn into_ranked(self) -> Vec<RankedCandidate> {
		let mut candidates = self
			.by_user
			.into_values()
			.map(|(user, mut contributions)| {
				contributions.sort_by(|left, right| {
					scoring::cmp_score_desc(left.weight, right.weight)
						.then_with(|| left.tag.tagname.cmp(&right.tag.tagname))
				});

				let score = scoring::sum_weights(
					contributions.iter().map(|contribution| contribution.weight),
				);
				let mut tags = Vec::with_capacity(contributions.len());
				let mut user_tags = Vec::with_capacity(contributions.len());

				for contribution in contributions {
					tags.push(contribution.tag);
					user_tags.push(contribution.edge);
				}

				RankedCandidate { user, score, tags, user_tags }
			})
			.collect::<Vec<_>>();

		// Exact score ties order by username ascending.
		candidates.sort_by(|left, right| {
			scoring::cmp_score_desc(left.score, right.score)
				.then_with(|| left.user.username.cmp(&right.user.username))
		});

		candidates
	}
}

pub(crate) fn positive_relevance(edge: &UserTagEdge) -> Result<i64> {
	if edge.relevance <= 0 {
		return Err(Error::DataCorruption {
			message: format!(
				"edge relevance must be a positive integer; username={} tagname={} relevance={}",
				edge.username, edge.tagname, edge.relevance
			),
		});
	}

	Ok(edge.relevance)
}

pub(crate) fn admits_candidate(cfg: &kith_config::Ranking, user: &UserVertex) -> bool {
	if !cfg.include_unverified && !user.verified {
		tracing::debug!(username = %user.username, "Dropping unverified candidate.");

		return false;
	}

	true
}
