//! Environment-backed app settings and setting expressions.
//!
//! A *setting expression* is a string that, once surrounding whitespace is
//! trimmed, both starts and ends with `%`. The name between the percent
//! runs refers to a process environment variable. The wrapping signals
//! "indirect through configuration" to the reader of a declaration, so a
//! literal value can never be confused with a settings lookup.

use std::env;

/// Check whether `raw` is a setting expression.
///
/// Leading and trailing whitespace is ignored. Anything that does not both
/// start and end with `%` after trimming is a literal, not an expression.
///
/// # Examples
///
/// ```
/// use worklet_conf::is_expression;
///
/// assert!(is_expression("%MY_SETTING%"));
/// assert!(is_expression("  %MY_SETTING%  "));
/// assert!(!is_expression("MY_SETTING"));
/// assert!(!is_expression("%MY_SETTING"));
/// assert!(!is_expression(""));
/// ```
pub fn is_expression(raw: &str) -> bool {
	let trimmed = raw.trim();
	!trimmed.is_empty() && trimmed.starts_with('%') && trimmed.ends_with('%')
}

/// Extract the setting name from a setting expression.
///
/// Returns `None` when `raw` is not a setting expression. The leading and
/// trailing runs of `%` are stripped in full, so `%%NAME%%` names the same
/// setting as `%NAME%`. The returned name may be empty (e.g. for `"%"` or
/// `"%%"`); looking up an empty name simply never finds a value.
///
/// # Examples
///
/// ```
/// use worklet_conf::expression_name;
///
/// assert_eq!(expression_name("%MY_SETTING%"), Some("MY_SETTING"));
/// assert_eq!(expression_name("%%MY_SETTING%%"), Some("MY_SETTING"));
/// assert_eq!(expression_name("MY_SETTING"), None);
/// ```
pub fn expression_name(raw: &str) -> Option<&str> {
	let trimmed = raw.trim();
	if is_expression(trimmed) {
		Some(trimmed.trim_matches('%'))
	} else {
		None
	}
}

/// Resolve a setting expression against the process environment.
///
/// Returns `None` when `raw` is not a setting expression or when the named
/// environment variable is unset. Values containing invalid UTF-8 are
/// treated as unset.
///
/// # Examples
///
/// ```
/// use worklet_conf::resolve_expression;
///
/// assert_eq!(resolve_expression("not an expression"), None);
/// assert_eq!(resolve_expression("%WORKLET_SETTING_THAT_DOES_NOT_EXIST%"), None);
/// ```
pub fn resolve_expression(raw: &str) -> Option<String> {
	let name = expression_name(raw)?;
	match env::var(name) {
		Ok(value) => Some(value),
		Err(_) => {
			tracing::debug!(setting = name, "setting expression named an unset variable");
			None
		}
	}
}

/// Typed reader over the app-settings store, with optional prefix support.
///
/// All lookups go to process environment variables. A prefix, when set, is
/// prepended to every key, which keeps an application's settings namespaced
/// (e.g. `WORKLET_`) without repeating the prefix at each call site.
///
/// # Examples
///
/// ```
/// use worklet_conf::AppSettings;
///
/// let settings = AppSettings::new().with_prefix("WORKLET_");
/// // Looks up WORKLET_TIMEOUT, falling back to the default when unset.
/// let timeout = settings.raw_or("TIMEOUT", "30");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppSettings {
	/// Optional prefix prepended to every key (e.g. `"WORKLET_"`)
	prefix: Option<String>,
}

impl AppSettings {
	/// Create a reader with no prefix.
	pub fn new() -> Self {
		Self { prefix: None }
	}

	/// Set a prefix for all settings lookups.
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	/// Get the full key name with prefix
	fn full_key(&self, key: &str) -> String {
		match &self.prefix {
			Some(prefix) => format!("{}{}", prefix, key),
			None => key.to_string(),
		}
	}

	/// Read a setting, erroring when it is missing.
	pub fn raw(&self, key: &str) -> Result<String, SettingsError> {
		let full_key = self.full_key(key);
		validate_setting_name(&full_key)?;
		env::var(&full_key).map_err(|_| SettingsError::MissingSetting(full_key))
	}

	/// Read a setting, substituting `default` when it is missing.
	pub fn raw_or(&self, key: &str, default: &str) -> String {
		let full_key = self.full_key(key);
		env::var(&full_key).unwrap_or_else(|_| default.to_string())
	}

	/// Resolve a setting expression, applying the prefix to the inner name.
	///
	/// Returns `None` when `raw` is not an expression or the prefixed name
	/// is unset; the caller decides what the absence of a value means.
	pub fn resolve(&self, raw: &str) -> Option<String> {
		let name = expression_name(raw)?;
		env::var(self.full_key(name)).ok()
	}
}

/// Reject setting names that cannot name an environment variable.
fn validate_setting_name(name: &str) -> Result<(), SettingsError> {
	if name.is_empty() {
		return Err(SettingsError::InvalidName {
			name: name.to_string(),
			reason: "name is empty".to_string(),
		});
	}
	if name.contains('=') || name.contains('\0') {
		return Err(SettingsError::InvalidName {
			name: name.to_string(),
			reason: "name contains '=' or NUL".to_string(),
		});
	}
	Ok(())
}

/// App-settings errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Missing app setting: {0}")]
	MissingSetting(String),

	#[error("Invalid setting name '{name}': {reason}")]
	InvalidName { name: String, reason: String },
}
