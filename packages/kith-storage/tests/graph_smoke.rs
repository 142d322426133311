use sqlx::PgConnection;

use kith_config::Postgres;
use kith_storage::{Error, db::Db, graph};
use kith_testkit::TestDatabase;

async fn seed(conn: &mut PgConnection) {
	for (username, verified) in [("alice", true), ("bob", true), ("carol", false)] {
		graph::upsert_user(conn, username, None, None, verified)
			.await
			.expect("Failed to upsert user.");
	}
	for tagname in ["cooking", "hiking"] {
		graph::upsert_tag(conn, tagname, "").await.expect("Failed to upsert tag.");
	}

	graph::upsert_edge(conn, "alice", "cooking", 8, "family recipes")
		.await
		.expect("Failed to upsert edge.");
	graph::upsert_edge(conn, "alice", "hiking", 4, "").await.expect("Failed to upsert edge.");
	graph::upsert_edge(conn, "bob", "cooking", 2, "").await.expect("Failed to upsert edge.");
	graph::upsert_edge(conn, "carol", "hiking", 8, "").await.expect("Failed to upsert edge.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set KITH_PG_DSN to run."]
async fn traversals_join_both_vertex_payloads() {
	let Some(base_dsn) = kith_testkit::env_dsn() else {
		eprintln!("Skipping traversals_join_both_vertex_payloads; set KITH_PG_DSN to run.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 1 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	let mut conn = db.pool.acquire().await.expect("Failed to acquire connection.");

	seed(&mut conn).await;

	let hits = graph::edges_for_tags(&mut conn, &["cooking".to_string(), "hiking".to_string()])
		.await
		.expect("Failed to traverse by tags.");

	assert_eq!(hits.len(), 4);
	assert!(hits.iter().all(|hit| hit.edge.relevance > 0));
	assert!(hits.iter().any(|hit| hit.user.username == "carol" && !hit.user.verified));

	let own = graph::edges_for_user(&mut conn, "alice").await.expect("Failed to traverse owner.");

	assert_eq!(own.len(), 2);
	assert_eq!(own[0].tag.tagname, "cooking");
	assert_eq!(own[0].edge.story, "family recipes");

	let shared = graph::edges_for_tag_excluding_user(&mut conn, "cooking", "alice")
		.await
		.expect("Failed to traverse shared tag.");

	assert_eq!(shared.len(), 1);
	assert_eq!(shared[0].user.username, "bob");

	drop(conn);
	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set KITH_PG_DSN to run."]
async fn writer_path_enforces_edge_invariants() {
	let Some(base_dsn) = kith_testkit::env_dsn() else {
		eprintln!("Skipping writer_path_enforces_edge_invariants; set KITH_PG_DSN to run.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 1 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	let mut conn = db.pool.acquire().await.expect("Failed to acquire connection.");

	seed(&mut conn).await;

	let err = graph::upsert_edge(&mut conn, "alice", "cooking", 0, "")
		.await
		.expect_err("Expected non-positive relevance to be rejected.");

	assert!(matches!(err, Error::InvalidArgument(_)));

	let err = graph::upsert_user(&mut conn, "Not A Name", None, None, false)
		.await
		.expect_err("Expected malformed username to be rejected.");

	assert!(matches!(err, Error::InvalidArgument(_)));

	// Re-tagging replaces the single (user, tag) edge instead of adding one.
	graph::upsert_edge(&mut conn, "alice", "cooking", 5, "changed my mind")
		.await
		.expect("Failed to update edge.");

	let own = graph::edges_for_user(&mut conn, "alice").await.expect("Failed to traverse owner.");

	assert_eq!(own.len(), 2);
	assert_eq!(own[0].edge.relevance, 5);

	graph::delete_edge(&mut conn, "alice", "cooking").await.expect("Failed to delete edge.");

	let err = graph::delete_edge(&mut conn, "alice", "cooking")
		.await
		.expect_err("Expected a second delete to find nothing.");

	assert!(matches!(err, Error::NotFound(_)));

	drop(conn);
	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
