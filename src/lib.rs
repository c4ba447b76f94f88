//! # Worklet
//!
//! Trigger metadata for the Worklet serverless worker framework.
//!
//! A Worklet application declares its functions to the host runtime through
//! explicit registration: each function contributes an [`HttpTrigger`]
//! descriptor (route template, allowed HTTP methods, authorization level)
//! to a [`TriggerRegistry`], and the host reads the registry to build its
//! HTTP routing table. This crate is the facade over the individual
//! workspace crates:
//!
//! - `worklet-triggers`: trigger descriptors, authorization levels, and the
//!   registration table
//! - `worklet-conf`: app-settings access and `%KEY%` setting expressions
//!
//! ## Quick Start
//!
//! ```
//! use worklet::prelude::*;
//!
//! let mut registry = TriggerRegistry::new();
//! let mut trigger = HttpTrigger::from_parts(
//!     AuthorizationLevel::Anonymous,
//!     ["GET", "POST"],
//! );
//! trigger.route = Some("orders/{id}".to_string());
//! registry.register("get_order", trigger).unwrap();
//!
//! assert_eq!(registry.route_for("get_order"), Some("orders/{id}"));
//! ```
//!
//! The HTTP listener and the function-invocation pipeline live in the host
//! runtime, not here; this workspace owns only the metadata contract.
//!
//! [`HttpTrigger`]: worklet_triggers::HttpTrigger
//! [`TriggerRegistry`]: worklet_triggers::TriggerRegistry

#[cfg(feature = "conf")]
pub use worklet_conf as conf;

#[cfg(feature = "triggers")]
pub use worklet_triggers as triggers;

// Re-export commonly used types
#[cfg(feature = "triggers")]
pub mod prelude {
	pub use worklet_triggers::{AuthorizationLevel, HttpTrigger, TriggerRegistry};

	#[cfg(feature = "conf")]
	pub use worklet_conf::AppSettings;
}
