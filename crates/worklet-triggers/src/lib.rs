//! HTTP trigger metadata for the Worklet framework.
//!
//! A trigger marks a function as invocable in response to an external
//! event; an [`HttpTrigger`] marks it as invocable over HTTP and carries
//! the configuration the host runtime needs to wire up dispatch: an
//! optional route template, the allowed HTTP methods, and an
//! [`AuthorizationLevel`].
//!
//! Worklet has no runtime reflection, so trigger metadata is not attached
//! to function signatures and discovered later. Instead the application
//! declares its functions explicitly at startup by registering each one in
//! a [`TriggerRegistry`], which the host runtime then reads to build its
//! HTTP routing table.
//!
//! ## Examples
//!
//! ```
//! use worklet_triggers::{AuthorizationLevel, HttpTrigger, TriggerRegistry};
//!
//! let mut registry = TriggerRegistry::new();
//!
//! // Route defaults to the function name, methods default to "any".
//! registry.register("health", HttpTrigger::new()).unwrap();
//!
//! let mut trigger = HttpTrigger::from_parts(
//!     AuthorizationLevel::Anonymous,
//!     ["GET", "POST"],
//! );
//! trigger.route = Some("orders/{id}".to_string());
//! registry.register("get_order", trigger).unwrap();
//!
//! assert_eq!(registry.route_for("health"), Some("health"));
//! assert_eq!(registry.route_for("get_order"), Some("orders/{id}"));
//! assert!(registry.allows_method("health", "DELETE"));
//! assert!(!registry.allows_method("get_order", "DELETE"));
//! ```

pub mod auth_level;
pub mod http_trigger;
pub mod registry;

pub use auth_level::{AuthorizationLevel, ParseAuthorizationLevelError};
pub use http_trigger::HttpTrigger;
pub use registry::{RegistryError, SharedTriggerRegistry, TriggerRegistry};
