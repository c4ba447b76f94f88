//! Authorization levels for HTTP-triggered functions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access-control tier controlling which callers may invoke an
/// HTTP-triggered function.
///
/// The host runtime enforces the level; this crate only records it. When a
/// declaration does not specify a level, [`AuthorizationLevel::Function`]
/// applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorizationLevel {
	/// No key required; any caller may invoke the function.
	Anonymous,
	/// A valid user credential is required.
	User,
	/// A function-scoped key is required.
	#[default]
	Function,
	/// A key scoped to the host system is required.
	System,
	/// The admin (master) key is required.
	Admin,
}

impl AuthorizationLevel {
	/// All members, in ascending order of privilege.
	pub const ALL: [AuthorizationLevel; 5] = [
		AuthorizationLevel::Anonymous,
		AuthorizationLevel::User,
		AuthorizationLevel::Function,
		AuthorizationLevel::System,
		AuthorizationLevel::Admin,
	];

	/// Canonical member name.
	pub fn as_str(&self) -> &'static str {
		match self {
			AuthorizationLevel::Anonymous => "Anonymous",
			AuthorizationLevel::User => "User",
			AuthorizationLevel::Function => "Function",
			AuthorizationLevel::System => "System",
			AuthorizationLevel::Admin => "Admin",
		}
	}

	/// Resolve a level from an app-setting key.
	///
	/// `key` must be a percent-wrapped setting expression (`%NAME%`) naming
	/// an environment variable whose value spells a level in any casing.
	/// Every other shape degrades to the [`AuthorizationLevel::Function`]
	/// default: empty or whitespace-only keys, keys missing either `%`
	/// delimiter, unset variables, and unparseable values. Resolution never
	/// fails; callers who want strict validation must check the key before
	/// calling.
	///
	/// # Examples
	///
	/// ```
	/// use worklet_triggers::AuthorizationLevel;
	///
	/// // Not percent-wrapped: treated as a literal, not an indirection.
	/// assert_eq!(
	///     AuthorizationLevel::from_app_setting("Admin"),
	///     AuthorizationLevel::Function,
	/// );
	/// assert_eq!(
	///     AuthorizationLevel::from_app_setting(""),
	///     AuthorizationLevel::Function,
	/// );
	/// ```
	pub fn from_app_setting(key: &str) -> Self {
		worklet_conf::resolve_expression(key)
			.and_then(|value| value.trim().parse().ok())
			.unwrap_or_default()
	}
}

impl fmt::Display for AuthorizationLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for AuthorizationLevel {
	type Err = ParseAuthorizationLevelError;

	/// Case-insensitive parse of a member name.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"anonymous" => Ok(AuthorizationLevel::Anonymous),
			"user" => Ok(AuthorizationLevel::User),
			"function" => Ok(AuthorizationLevel::Function),
			"system" => Ok(AuthorizationLevel::System),
			"admin" => Ok(AuthorizationLevel::Admin),
			_ => Err(ParseAuthorizationLevelError {
				value: s.to_string(),
			}),
		}
	}
}

/// Error returned when a string names no authorization level.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown authorization level: '{value}'")]
pub struct ParseAuthorizationLevelError {
	value: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serial_test::serial;
	use std::env;

	#[test]
	fn test_default_is_function() {
		assert_eq!(AuthorizationLevel::default(), AuthorizationLevel::Function);
	}

	#[rstest]
	#[case("anonymous", AuthorizationLevel::Anonymous)]
	#[case("Anonymous", AuthorizationLevel::Anonymous)]
	#[case("ANONYMOUS", AuthorizationLevel::Anonymous)]
	#[case("user", AuthorizationLevel::User)]
	#[case("function", AuthorizationLevel::Function)]
	#[case("SyStEm", AuthorizationLevel::System)]
	#[case("admin", AuthorizationLevel::Admin)]
	fn test_parse_case_insensitive(#[case] input: &str, #[case] expected: AuthorizationLevel) {
		assert_eq!(input.parse::<AuthorizationLevel>().unwrap(), expected);
	}

	#[test]
	fn test_parse_unknown() {
		assert!("superuser".parse::<AuthorizationLevel>().is_err());
		assert!("".parse::<AuthorizationLevel>().is_err());
	}

	#[test]
	fn test_display_round_trips() {
		for level in AuthorizationLevel::ALL {
			assert_eq!(
				level.to_string().parse::<AuthorizationLevel>().unwrap(),
				level
			);
		}
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	#[case("MyAuthKey")]
	#[case("%MyAuthKey")]
	#[case("MyAuthKey%")]
	fn test_from_app_setting_malformed_keys(#[case] key: &str) {
		assert_eq!(
			AuthorizationLevel::from_app_setting(key),
			AuthorizationLevel::Function
		);
	}

	#[test]
	#[serial]
	fn test_from_app_setting_resolves() {
		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("WORKLET_TEST_AUTH_LEVEL", "Admin");
		}
		assert_eq!(
			AuthorizationLevel::from_app_setting("%WORKLET_TEST_AUTH_LEVEL%"),
			AuthorizationLevel::Admin
		);
		// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::remove_var("WORKLET_TEST_AUTH_LEVEL");
		}
	}

	#[test]
	#[serial]
	fn test_from_app_setting_lowercase_value() {
		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("WORKLET_TEST_AUTH_LEVEL_LC", "admin");
		}
		assert_eq!(
			AuthorizationLevel::from_app_setting("%WORKLET_TEST_AUTH_LEVEL_LC%"),
			AuthorizationLevel::Admin
		);
		// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::remove_var("WORKLET_TEST_AUTH_LEVEL_LC");
		}
	}

	#[test]
	#[serial]
	fn test_from_app_setting_unparseable_value() {
		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("WORKLET_TEST_AUTH_LEVEL_BAD", "not-a-level");
		}
		assert_eq!(
			AuthorizationLevel::from_app_setting("%WORKLET_TEST_AUTH_LEVEL_BAD%"),
			AuthorizationLevel::Function
		);
		// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::remove_var("WORKLET_TEST_AUTH_LEVEL_BAD");
		}
	}

	#[test]
	fn test_from_app_setting_unset_variable() {
		assert_eq!(
			AuthorizationLevel::from_app_setting("%WORKLET_TEST_AUTH_LEVEL_NEVER_SET%"),
			AuthorizationLevel::Function
		);
	}

	#[test]
	fn test_serde_lowercase_wire_names() {
		let json = serde_json::to_string(&AuthorizationLevel::Anonymous).unwrap();
		assert_eq!(json, "\"anonymous\"");
		let level: AuthorizationLevel = serde_json::from_str("\"admin\"").unwrap();
		assert_eq!(level, AuthorizationLevel::Admin);
	}
}
