//! Explicit registration table for HTTP triggers.

use crate::HttpTrigger;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// A registry shared between the declaring application and the host
/// runtime.
pub type SharedTriggerRegistry = Arc<RwLock<TriggerRegistry>>;

/// Registration table mapping function names to their HTTP triggers.
///
/// Worklet has no runtime reflection, so the application declares its
/// functions here at startup and the host runtime reads the table to build
/// HTTP dispatch. Registration order is preserved.
///
/// # Examples
///
/// ```
/// use worklet_triggers::{HttpTrigger, TriggerRegistry};
///
/// let mut registry = TriggerRegistry::new();
/// registry.register("health", HttpTrigger::new()).unwrap();
///
/// assert_eq!(registry.len(), 1);
/// assert!(registry.get("health").is_some());
/// // A name can only be claimed once.
/// assert!(registry.register("health", HttpTrigger::new()).is_err());
/// ```
#[derive(Debug, Default)]
pub struct TriggerRegistry {
	triggers: IndexMap<String, HttpTrigger>,
}

impl TriggerRegistry {
	/// Create an empty registry.
	pub fn new() -> Self {
		Self {
			triggers: IndexMap::new(),
		}
	}

	/// Register a function's HTTP trigger under its function name.
	///
	/// Each function name may be registered once; a second registration is
	/// rejected rather than silently replacing the first.
	pub fn register(
		&mut self,
		name: impl Into<String>,
		trigger: HttpTrigger,
	) -> Result<(), RegistryError> {
		let name = name.into();
		if self.triggers.contains_key(&name) {
			return Err(RegistryError::DuplicateFunction(name));
		}
		tracing::debug!(
			function = %name,
			auth_level = %trigger.auth_level(),
			route = trigger.route.as_deref(),
			"registered HTTP trigger"
		);
		self.triggers.insert(name, trigger);
		Ok(())
	}

	/// Look up a function's trigger by name.
	pub fn get(&self, name: &str) -> Option<&HttpTrigger> {
		self.triggers.get(name)
	}

	/// Iterate over `(function name, trigger)` pairs in registration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &HttpTrigger)> {
		self.triggers.iter().map(|(name, trigger)| (name.as_str(), trigger))
	}

	/// Number of registered functions.
	pub fn len(&self) -> usize {
		self.triggers.len()
	}

	/// Whether the registry is empty.
	pub fn is_empty(&self) -> bool {
		self.triggers.is_empty()
	}

	/// Effective route for a registered function.
	///
	/// This is where the defaulting policy lives: a trigger without an
	/// explicit route is served at the function's registered name.
	///
	/// # Examples
	///
	/// ```
	/// use worklet_triggers::{HttpTrigger, TriggerRegistry};
	///
	/// let mut registry = TriggerRegistry::new();
	/// registry.register("health", HttpTrigger::new()).unwrap();
	///
	/// let mut trigger = HttpTrigger::new();
	/// trigger.route = Some("orders/{id}".to_string());
	/// registry.register("get_order", trigger).unwrap();
	///
	/// assert_eq!(registry.route_for("health"), Some("health"));
	/// assert_eq!(registry.route_for("get_order"), Some("orders/{id}"));
	/// assert_eq!(registry.route_for("missing"), None);
	/// ```
	pub fn route_for<'a>(&'a self, name: &'a str) -> Option<&'a str> {
		self.triggers
			.get(name)
			.map(|trigger| trigger.route.as_deref().unwrap_or(name))
	}

	/// Whether a registered function accepts the given HTTP method.
	///
	/// A trigger without a method restriction accepts any method. Method
	/// comparison is ASCII case-insensitive on the consumer side even
	/// though the descriptor stores method names verbatim.
	pub fn allows_method(&self, name: &str, method: &str) -> bool {
		match self.triggers.get(name) {
			Some(trigger) => match trigger.methods() {
				Some(methods) => methods.iter().any(|m| m.eq_ignore_ascii_case(method)),
				None => true,
			},
			None => false,
		}
	}

	/// Wrap the registry for sharing with the host runtime.
	pub fn into_shared(self) -> SharedTriggerRegistry {
		Arc::new(RwLock::new(self))
	}
}

/// Registration errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
	#[error("Function '{0}' is already registered")]
	DuplicateFunction(String),
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::AuthorizationLevel;

	#[test]
	fn test_register_and_get() {
		let mut registry = TriggerRegistry::new();
		assert!(registry.is_empty());
		registry
			.register("health", HttpTrigger::from_auth_level(AuthorizationLevel::Anonymous))
			.unwrap();
		assert_eq!(registry.len(), 1);
		assert_eq!(
			registry.get("health").unwrap().auth_level(),
			AuthorizationLevel::Anonymous
		);
		assert!(registry.get("missing").is_none());
	}

	#[test]
	fn test_duplicate_registration_rejected() {
		let mut registry = TriggerRegistry::new();
		registry.register("health", HttpTrigger::new()).unwrap();
		let err = registry.register("health", HttpTrigger::new()).unwrap_err();
		assert!(matches!(err, RegistryError::DuplicateFunction(name) if name == "health"));
	}

	#[test]
	fn test_iter_preserves_registration_order() {
		let mut registry = TriggerRegistry::new();
		registry.register("c", HttpTrigger::new()).unwrap();
		registry.register("a", HttpTrigger::new()).unwrap();
		registry.register("b", HttpTrigger::new()).unwrap();
		let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
		assert_eq!(names, vec!["c", "a", "b"]);
	}

	#[test]
	fn test_route_for_defaults_to_function_name() {
		let mut registry = TriggerRegistry::new();
		registry.register("health", HttpTrigger::new()).unwrap();
		let mut trigger = HttpTrigger::new();
		trigger.route = Some("orders/{id}".to_string());
		registry.register("get_order", trigger).unwrap();

		assert_eq!(registry.route_for("health"), Some("health"));
		assert_eq!(registry.route_for("get_order"), Some("orders/{id}"));
		assert_eq!(registry.route_for("missing"), None);
	}

	#[test]
	fn test_allows_method() {
		let mut registry = TriggerRegistry::new();
		registry.register("any", HttpTrigger::new()).unwrap();
		registry
			.register("restricted", HttpTrigger::from_methods(["GET", "post"]))
			.unwrap();

		assert!(registry.allows_method("any", "DELETE"));
		assert!(registry.allows_method("restricted", "get"));
		assert!(registry.allows_method("restricted", "POST"));
		assert!(!registry.allows_method("restricted", "DELETE"));
		assert!(!registry.allows_method("missing", "GET"));
	}

	#[test]
	fn test_into_shared() {
		let mut registry = TriggerRegistry::new();
		registry.register("health", HttpTrigger::new()).unwrap();
		let shared = registry.into_shared();
		assert_eq!(shared.read().len(), 1);
	}
}
