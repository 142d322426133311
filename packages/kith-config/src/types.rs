use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub storage: Storage,
	#[serde(default)]
	pub ranking: Ranking,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Deserialize)]
pub struct Ranking {
	/// Whether candidates who have not verified an e-mail address may appear
	/// in ranking output. Matches the historic behavior when `true`.
	#[serde(default = "default_include_unverified")]
	pub include_unverified: bool,
}
impl Default for Ranking {
	fn default() -> Self {
		Self { include_unverified: default_include_unverified() }
	}
}

fn default_include_unverified() -> bool {
	true
}
