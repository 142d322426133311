use regex::Regex;

pub const USERNAME_MIN_CHARS: usize = 2;
pub const USERNAME_MAX_CHARS: usize = 32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IdentityReject {
	RejectEmpty,
	RejectTooShort,
	RejectTooLong,
	RejectMalformed,
}

/// Usernames are lowercase alphanumeric runs joined by single `.`, `-` or `_`
/// separators, 2 to 32 characters.
pub fn validate_username(username: &str) -> Result<(), IdentityReject> {
	if username.trim().is_empty() {
		return Err(IdentityReject::RejectEmpty);
	}

	let chars = username.chars().count();

	if chars < USERNAME_MIN_CHARS {
		return Err(IdentityReject::RejectTooShort);
	}
	if chars > USERNAME_MAX_CHARS {
		return Err(IdentityReject::RejectTooLong);
	}
	if !matches_pattern(r"^[a-z0-9]+([._-][a-z0-9]+)*$", username) {
		return Err(IdentityReject::RejectMalformed);
	}

	Ok(())
}

/// Tagnames are lowercase alphanumeric runs joined by single hyphens.
pub fn validate_tagname(tagname: &str) -> Result<(), IdentityReject> {
	if tagname.trim().is_empty() {
		return Err(IdentityReject::RejectEmpty);
	}
	if !matches_pattern(r"^[a-z0-9]+(-[a-z0-9]+)*$", tagname) {
		return Err(IdentityReject::RejectMalformed);
	}

	Ok(())
}

fn matches_pattern(pattern: &str, input: &str) -> bool {
	Regex::new(pattern).map(|re| re.is_match(input)).unwrap_or(false)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_separated_usernames() {
		assert_eq!(validate_username("alice"), Ok(()));
		assert_eq!(validate_username("a1"), Ok(()));
		assert_eq!(validate_username("mary.jane_watson-77"), Ok(()));
	}

	#[test]
	fn rejects_short_and_long_usernames() {
		assert_eq!(validate_username("a"), Err(IdentityReject::RejectTooShort));
		assert_eq!(validate_username(&"a".repeat(33)), Err(IdentityReject::RejectTooLong));
	}

	#[test]
	fn rejects_malformed_usernames() {
		assert_eq!(validate_username("Alice"), Err(IdentityReject::RejectMalformed));
		assert_eq!(validate_username("al..ice"), Err(IdentityReject::RejectMalformed));
		assert_eq!(validate_username("-alice"), Err(IdentityReject::RejectMalformed));
		assert_eq!(validate_username("alice-"), Err(IdentityReject::RejectMalformed));
		assert_eq!(validate_username("  "), Err(IdentityReject::RejectEmpty));
	}

	#[test]
	fn validates_tagnames() {
		assert_eq!(validate_tagname("cooking"), Ok(()));
		assert_eq!(validate_tagname("rock-climbing"), Ok(()));
		assert_eq!(validate_tagname("Rock"), Err(IdentityReject::RejectMalformed));
		assert_eq!(validate_tagname("rock--climbing"), Err(IdentityReject::RejectMalformed));
		assert_eq!(validate_tagname(""), Err(IdentityReject::RejectEmpty));
	}
}
