//! App-settings access for the Worklet framework.
//!
//! Worklet follows its host platform's app-settings model: configuration
//! values live in process environment variables, and other configuration
//! surfaces may refer to a setting indirectly with a percent-wrapped
//! *setting expression* such as `%MY_SETTING%` instead of a literal value.
//!
//! This crate provides the expression syntax ([`settings::is_expression`],
//! [`settings::resolve_expression`]) and a small typed reader over the
//! settings store ([`AppSettings`]).

pub mod settings;

pub use settings::{
	AppSettings, SettingsError, expression_name, is_expression, resolve_expression,
};
