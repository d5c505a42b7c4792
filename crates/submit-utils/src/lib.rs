//! Hive job submission utilities.
//!
//! This crate composes the job description model into the high-level
//! surface a job-submission client consumes:
//!
//! - **Job Building** - Accumulate a job description through chained calls
//! - **Argument Compilation** - Serialize the description into the exact
//!   command-line argument string the execution engine expects
//! - **Dependency Staging** - Materialize the job's dependency list into a
//!   local directory ready for upload
//!
//! # Example
//!
//! ```
//! use hive_submit_utils::{build_submit_request, HiveJob};
//!
//! let job = HiveJob::new()
//!     .job_name("daily rollup")
//!     .script("SELECT * FROM events WHERE day = '${day}';")
//!     .parameter("day", "2026-08-29")
//!     .property("mapred.queue.name", "etl");
//!
//! assert_eq!(
//!     job.cmd_args(),
//!     "--hiveconf mapred.queue.name=etl -d day=2026-08-29 -f script.hive"
//! );
//!
//! let request = build_submit_request(&job);
//! assert_eq!(request.attachments, vec!["script.hive".to_string()]);
//! ```

mod args;
mod builder;
mod conversion;
mod error;
mod staging;

pub use args::compile_arguments;
pub use builder::HiveJob;
pub use conversion::{build_submit_request, SubmitRequest};
pub use error::StagingError;
pub use staging::stage_dependencies;
