//! Script source classification.
//!
//! A caller supplies a script as a plain string which either names a file on
//! the local filesystem or contains the script text itself. The distinction
//! is decided exactly once, at this boundary, producing a tagged value the
//! rest of the pipeline can match on without re-inspecting the filesystem.

use std::path::{Path, PathBuf};

use crate::dependency::JobDependency;

/// Filename given to inline script content when it is staged as a job
/// dependency.
pub const DEFAULT_SCRIPT_NAME: &str = "script.hive";

/// A job script, classified as a file reference or literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    /// An existing file on the local filesystem, uploaded verbatim.
    FilePath(PathBuf),
    /// Literal script text, materialized as a synthetic file at submission.
    InlineText(String),
}

impl ScriptSource {
    /// Classify a caller-supplied string as a file path or inline text.
    ///
    /// The string is a file path when it names an existing regular file.
    /// Everything else routes to the inline branch, including empty strings
    /// and strings the filesystem rejects outright (such as embedded NUL
    /// bytes), so classification never fails.
    ///
    /// This existence check is the only filesystem access in the model; it
    /// performs no retries.
    ///
    /// # Arguments
    /// * `script` - A path to a script file or the script text to run
    ///
    /// # Returns
    /// The classified script source.
    pub fn classify(script: impl Into<String>) -> Self {
        let script: String = script.into();
        if Path::new(&script).is_file() {
            tracing::debug!(path = %script, "script resolved to an existing file");
            ScriptSource::FilePath(PathBuf::from(script))
        } else {
            tracing::debug!(bytes = script.len(), "script treated as inline text");
            ScriptSource::InlineText(script)
        }
    }

    /// Filename the script will have once staged alongside the job.
    ///
    /// File scripts keep their base name with directory components
    /// discarded; inline scripts use [`DEFAULT_SCRIPT_NAME`].
    pub fn file_name(&self) -> String {
        match self {
            ScriptSource::FilePath(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_SCRIPT_NAME.to_string()),
            ScriptSource::InlineText(_) => DEFAULT_SCRIPT_NAME.to_string(),
        }
    }

    /// Convert into the dependency that must be staged for this script.
    pub fn into_dependency(self) -> JobDependency {
        match self {
            ScriptSource::FilePath(path) => JobDependency::File { path },
            ScriptSource::InlineText(data) => JobDependency::Inline {
                name: DEFAULT_SCRIPT_NAME.to_string(),
                data,
            },
        }
    }
}
