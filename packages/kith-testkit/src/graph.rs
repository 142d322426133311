use std::collections::BTreeMap;

use kith_domain::{TagHit, TagVertex, UserTagEdge, UserVertex};

/// An in-memory bipartite user-tag graph exposing the same traversal shapes
/// as the Postgres store. Edges are stored exactly as given, including
/// duplicated pairs and non-positive relevance values, so that corruption
/// handling stays reachable from tests.
#[derive(Debug, Default)]
pub struct MemoryGraph {
	users: BTreeMap<String, UserVertex>,
	tags: BTreeMap<String, TagVertex>,
	edges: Vec<UserTagEdge>,
}
impl MemoryGraph {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_user(&mut self, user: UserVertex) {
		self.users.insert(user.username.clone(), user);
	}

	pub fn add_tag(&mut self, tag: TagVertex) {
		self.tags.insert(tag.tagname.clone(), tag);
	}

	pub fn add_edge(&mut self, edge: UserTagEdge) {
		self.edges.push(edge);
	}

	pub fn hits_for_tags(&self, tagnames: &[String]) -> Vec<TagHit> {
		self.edges
			.iter()
			.filter(|edge| tagnames.iter().any(|tagname| tagname == &edge.tagname))
			.filter_map(|edge| self.hit(edge))
			.collect()
	}

	pub fn hits_for_user(&self, username: &str) -> Vec<TagHit> {
		self.edges
			.iter()
			.filter(|edge| edge.username == username)
			.filter_map(|edge| self.hit(edge))
			.collect()
	}

	pub fn hits_for_tag_excluding(&self, tagname: &str, exclude_username: &str) -> Vec<TagHit> {
		self.edges
			.iter()
			.filter(|edge| edge.tagname == tagname && edge.username != exclude_username)
			.filter_map(|edge| self.hit(edge))
			.collect()
	}

	// An edge whose endpoints are not loaded yields no hit, matching the
	// store's inner joins.
	fn hit(&self, edge: &UserTagEdge) -> Option<TagHit> {
		let user = self.users.get(&edge.username)?.clone();
		let tag = self.tags.get(&edge.tagname)?.clone();

		Some(TagHit { user, tag, edge: edge.clone() })
	}
}
