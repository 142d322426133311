pub mod list_tags;
pub mod rank_by_shared_tags;
pub mod rank_by_tags;

mod candidate;
mod error;

pub use candidate::RankedCandidate;
pub use error::{Error, Result};
pub use list_tags::{TagListItem, TagListRequest, TagListResponse};
pub use rank_by_shared_tags::{RankBySharedTagsRequest, RankBySharedTagsResponse};
pub use rank_by_tags::{RankByTagsRequest, RankByTagsResponse};

use std::{future::Future, pin::Pin, sync::Arc};

use kith_config::Config;
use kith_domain::TagHit;
use kith_storage::db::Db;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The narrow read-only query interface the ranker traverses. One traversal
/// call reads from one consistent snapshot of the graph; the ranker never
/// mutates the store.
pub trait GraphSource
where
	Self: Send + Sync,
{
	fn edges_for_tags<'a>(
		&'a self,
		tagnames: &'a [String],
	) -> BoxFuture<'a, color_eyre::Result<Vec<TagHit>>>;

	fn edges_for_user<'a>(
		&'a self,
		username: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<TagHit>>>;

	fn edges_for_tag_excluding_user<'a>(
		&'a self,
		tagname: &'a str,
		exclude_username: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<TagHit>>>;
}

/// Stateless across calls; safe to share and invoke concurrently. The source
/// handle is opened and owned by the caller.
pub struct RankService {
	pub cfg: Config,
	pub source: Arc<dyn GraphSource>,
}
impl RankService {
	pub fn new(cfg: Config, source: Arc<dyn GraphSource>) -> Self {
		Self { cfg, source }
	}
}

pub struct PgGraphSource {
	db: Db,
}
impl PgGraphSource {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}
impl GraphSource for PgGraphSource {
	fn edges_for_tags<'a>(
		&'a self,
		tagnames: &'a [String],
	) -> BoxFuture<'a, color_eyre::Result<Vec<TagHit>>> {
		Box::pin(async move {
			let mut conn = self.db.pool.acquire().await?;

			Ok(kith_storage::graph::edges_for_tags(&mut conn, tagnames).await?)
		})
	}

	fn edges_for_user<'a>(
		&'a self,
		username: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<TagHit>>> {
		Box::pin(async move {
			let mut conn = self.db.pool.acquire().await?;

			Ok(kith_storage::graph::edges_for_user(&mut conn, username).await?)
		})
	}

	fn edges_for_tag_excluding_user<'a>(
		&'a self,
		tagname: &'a str,
		exclude_username: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<TagHit>>> {
		Box::pin(async move {
			let mut conn = self.db.pool.acquire().await?;

			Ok(kith_storage::graph::edges_for_tag_excluding_user(
				&mut conn,
				tagname,
				exclude_username,
			)
			.await?)
		})
	}
}
