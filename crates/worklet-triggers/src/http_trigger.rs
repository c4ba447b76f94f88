//! The HTTP trigger descriptor.

use crate::AuthorizationLevel;
use serde::{Deserialize, Serialize};

/// Metadata marking a function as HTTP-invocable.
///
/// One descriptor exists per declared function. The declaration site builds
/// it with one of the constructors and hands it to the registry; the host
/// runtime reads the three fields to build its routing table.
///
/// `methods` and `auth_level` are fixed at construction and exposed
/// read-only. `route` is deliberately different: it is a public, mutable
/// field the declaration site may assign after construction. When left
/// absent, the runtime defaults the route to the function's registered
/// name (see [`TriggerRegistry::route_for`]).
///
/// # Examples
///
/// ```
/// use worklet_triggers::{AuthorizationLevel, HttpTrigger};
///
/// let mut trigger = HttpTrigger::from_methods(["GET", "POST"]);
/// trigger.route = Some("orders/{id}".to_string());
///
/// assert_eq!(trigger.auth_level(), AuthorizationLevel::Function);
/// assert_eq!(trigger.methods(), Some(&["GET".to_string(), "POST".to_string()][..]));
/// ```
///
/// [`TriggerRegistry::route_for`]: crate::TriggerRegistry::route_for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpTrigger {
	/// Route template (e.g. `orders/{id}`). Absent means the runtime uses
	/// the function's name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub route: Option<String>,

	/// Allowed HTTP methods, exactly as supplied: order, duplicates, and
	/// casing are preserved. Absent means any method is accepted.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	methods: Option<Vec<String>>,

	/// Access tier required to invoke the function.
	#[serde(default)]
	auth_level: AuthorizationLevel,
}

impl HttpTrigger {
	/// Trigger accepting any method at the default
	/// [`AuthorizationLevel::Function`] level.
	///
	/// # Examples
	///
	/// ```
	/// use worklet_triggers::{AuthorizationLevel, HttpTrigger};
	///
	/// let trigger = HttpTrigger::new();
	/// assert_eq!(trigger.route, None);
	/// assert_eq!(trigger.methods(), None);
	/// assert_eq!(trigger.auth_level(), AuthorizationLevel::Function);
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Trigger restricted to the given methods, at the default level.
	pub fn from_methods<I, S>(methods: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			route: None,
			methods: Some(methods.into_iter().map(Into::into).collect()),
			auth_level: AuthorizationLevel::default(),
		}
	}

	/// Trigger at an explicit level, accepting any method.
	pub fn from_auth_level(auth_level: AuthorizationLevel) -> Self {
		Self {
			route: None,
			methods: None,
			auth_level,
		}
	}

	/// Trigger whose level is resolved from an app-setting key.
	///
	/// The key follows the `%NAME%` setting-expression syntax; anything
	/// that fails to resolve degrades to the default level (see
	/// [`AuthorizationLevel::from_app_setting`]). This constructor cannot
	/// fail.
	///
	/// # Examples
	///
	/// ```
	/// use worklet_triggers::{AuthorizationLevel, HttpTrigger};
	///
	/// // Unset variable: falls back to the Function default.
	/// let trigger = HttpTrigger::from_auth_key("%WORKLET_DOCS_UNSET_KEY%");
	/// assert_eq!(trigger.auth_level(), AuthorizationLevel::Function);
	/// ```
	pub fn from_auth_key(key: &str) -> Self {
		Self::from_auth_level(AuthorizationLevel::from_app_setting(key))
	}

	/// Trigger with both an explicit level and a method restriction.
	pub fn from_parts<I, S>(auth_level: AuthorizationLevel, methods: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			route: None,
			methods: Some(methods.into_iter().map(Into::into).collect()),
			auth_level,
		}
	}

	/// Trigger with a resolved level and a method restriction.
	pub fn from_auth_key_and_methods<I, S>(key: &str, methods: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::from_parts(AuthorizationLevel::from_app_setting(key), methods)
	}

	/// Allowed methods, or `None` when the trigger accepts any method.
	pub fn methods(&self) -> Option<&[String]> {
		self.methods.as_deref()
	}

	/// The access tier required to invoke the function.
	pub fn auth_level(&self) -> AuthorizationLevel {
		self.auth_level
	}
}
