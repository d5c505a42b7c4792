//! Job description data model for Hive job submission.
//!
//! This crate provides the building blocks a job builder assembles before
//! handing a job to the remote execution service client:
//!
//! - [`ScriptSource`] - a script classified once as a local file or inline text
//! - [`JobDependency`] - a file staged alongside the job before execution
//! - [`OrderedParams`] - insertion-ordered key/value configuration

pub mod dependency;
pub mod params;
pub mod script;

pub use dependency::JobDependency;
pub use params::OrderedParams;
pub use script::{ScriptSource, DEFAULT_SCRIPT_NAME};
