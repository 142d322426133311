use sqlx::PgConnection;

use kith_domain::{TagHit, identity};

use crate::{Error, Result, models::TagHitRow};

pub async fn edges_for_tags(
	executor: &mut PgConnection,
	tagnames: &[String],
) -> Result<Vec<TagHit>> {
	if tagnames.is_empty() {
		return Ok(vec![]);
	}

	let rows = sqlx::query_as::<_, TagHitRow>(
		"\
SELECT
	u.username,
	u.given_name,
	u.family_name,
	u.verified,
	t.tagname,
	t.description,
	t.created_at AS tag_created_at,
	ut.relevance,
	ut.story
FROM user_tags ut
JOIN users u ON u.username = ut.username
JOIN tags t ON t.tagname = ut.tagname
WHERE ut.tagname = ANY($1::text[])
ORDER BY u.username, t.tagname",
	)
	.bind(tagnames.to_vec())
	.fetch_all(&mut *executor)
	.await?;

	Ok(rows.into_iter().map(TagHit::from).collect())
}

pub async fn edges_for_user(executor: &mut PgConnection, username: &str) -> Result<Vec<TagHit>> {
	let rows = sqlx::query_as::<_, TagHitRow>(
		"\
SELECT
	u.username,
	u.given_name,
	u.family_name,
	u.verified,
	t.tagname,
	t.description,
	t.created_at AS tag_created_at,
	ut.relevance,
	ut.story
FROM user_tags ut
JOIN users u ON u.username = ut.username
JOIN tags t ON t.tagname = ut.tagname
WHERE ut.username = $1
ORDER BY t.tagname",
	)
	.bind(username)
	.fetch_all(&mut *executor)
	.await?;

	Ok(rows.into_iter().map(TagHit::from).collect())
}

pub async fn edges_for_tag_excluding_user(
	executor: &mut PgConnection,
	tagname: &str,
	exclude_username: &str,
) -> Result<Vec<TagHit>> {
	let rows = sqlx::query_as::<_, TagHitRow>(
		"\
SELECT
	u.username,
	u.given_name,
	u.family_name,
	u.verified,
	t.tagname,
	t.description,
	t.created_at AS tag_created_at,
	ut.relevance,
	ut.story
FROM user_tags ut
JOIN users u ON u.username = ut.username
JOIN tags t ON t.tagname = ut.tagname
WHERE ut.tagname = $1
	AND ut.username <> $2
ORDER BY u.username",
	)
	.bind(tagname)
	.bind(exclude_username)
	.fetch_all(&mut *executor)
	.await?;

	Ok(rows.into_iter().map(TagHit::from).collect())
}

pub async fn upsert_user(
	executor: &mut PgConnection,
	username: &str,
	given_name: Option<&str>,
	family_name: Option<&str>,
	verified: bool,
) -> Result<()> {
	if identity::validate_username(username).is_err() {
		return Err(Error::InvalidArgument(format!(
			"user username is malformed; username={username}"
		)));
	}

	sqlx::query(
		"\
INSERT INTO users (username, given_name, family_name, verified, created_at)
VALUES ($1, $2, $3, $4, now())
ON CONFLICT (username)
DO UPDATE
SET
	given_name = EXCLUDED.given_name,
	family_name = EXCLUDED.family_name,
	verified = EXCLUDED.verified",
	)
	.bind(username)
	.bind(given_name)
	.bind(family_name)
	.bind(verified)
	.execute(&mut *executor)
	.await?;

	Ok(())
}

pub async fn upsert_tag(
	executor: &mut PgConnection,
	tagname: &str,
	description: &str,
) -> Result<()> {
	if identity::validate_tagname(tagname).is_err() {
		return Err(Error::InvalidArgument(format!("tag tagname is malformed; tagname={tagname}")));
	}

	sqlx::query(
		"\
INSERT INTO tags (tagname, description, created_at)
VALUES ($1, $2, now())
ON CONFLICT (tagname)
DO UPDATE
SET description = EXCLUDED.description",
	)
	.bind(tagname)
	.bind(description)
	.execute(&mut *executor)
	.await?;

	Ok(())
}

/// Creates or replaces the one edge a user owns toward a tag. The (user, tag)
/// pair is the natural key; only the owning user's handlers reach this call.
pub async fn upsert_edge(
	executor: &mut PgConnection,
	username: &str,
	tagname: &str,
	relevance: i64,
	story: &str,
) -> Result<()> {
	if relevance <= 0 {
		return Err(Error::InvalidArgument(format!(
			"edge relevance must be a positive integer; username={username} tagname={tagname} relevance={relevance}"
		)));
	}

	sqlx::query(
		"\
INSERT INTO user_tags (username, tagname, relevance, story, created_at)
VALUES ($1, $2, $3, $4, now())
ON CONFLICT (username, tagname)
DO UPDATE
SET
	relevance = EXCLUDED.relevance,
	story = EXCLUDED.story",
	)
	.bind(username)
	.bind(tagname)
	.bind(relevance)
	.bind(story)
	.execute(&mut *executor)
	.await?;

	Ok(())
}

pub async fn delete_edge(
	executor: &mut PgConnection,
	username: &str,
	tagname: &str,
) -> Result<()> {
	let res = sqlx::query("DELETE FROM user_tags WHERE username = $1 AND tagname = $2")
		.bind(username)
		.bind(tagname)
		.execute(&mut *executor)
		.await?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound(format!(
			"edge not found; username={username} tagname={tagname}"
		)));
	}

	Ok(())
}
