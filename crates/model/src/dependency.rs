//! Job dependency descriptors.
//!
//! Every file a job needs at execution time is described by a
//! [`JobDependency`]. The job client resolves each descriptor before
//! submission: file dependencies are uploaded from their local path,
//! inline dependencies are materialized from their content.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A file that must be staged alongside a job before execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum JobDependency {
    /// An existing local file, uploaded verbatim.
    File {
        /// Full path to the file on the local filesystem.
        path: PathBuf,
    },
    /// A synthetic file materialized from inline content.
    Inline {
        /// Filename the content is staged under.
        name: String,
        /// Literal file content.
        data: String,
    },
}

impl JobDependency {
    /// Filename the dependency will have once staged, with directory
    /// components discarded.
    pub fn staged_name(&self) -> String {
        match self {
            JobDependency::File { path } => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned()),
            JobDependency::Inline { name, .. } => name.clone(),
        }
    }

    /// Whether this dependency is materialized from inline content.
    pub fn is_inline(&self) -> bool {
        matches!(self, JobDependency::Inline { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staged_name_file() {
        let dep: JobDependency = JobDependency::File {
            path: "/etc/hive/session.conf".into(),
        };
        assert_eq!(dep.staged_name(), "session.conf");
    }

    #[test]
    fn test_staged_name_inline() {
        let dep: JobDependency = JobDependency::Inline {
            name: "script.hive".into(),
            data: "SELECT 1;".into(),
        };
        assert_eq!(dep.staged_name(), "script.hive");
    }

    #[test]
    fn test_is_inline() {
        let file: JobDependency = JobDependency::File {
            path: "/tmp/a.hql".into(),
        };
        let inline: JobDependency = JobDependency::Inline {
            name: "script.hive".into(),
            data: String::new(),
        };
        assert!(!file.is_inline());
        assert!(inline.is_inline());
    }

    #[test]
    fn test_serialize_tagged() {
        let dep: JobDependency = JobDependency::Inline {
            name: "script.hive".into(),
            data: "SELECT 1;".into(),
        };
        let json: String = serde_json::to_string(&dep).unwrap();
        assert!(json.contains("\"type\":\"inline\""));
        assert!(json.contains("script.hive"));
    }

    #[test]
    fn test_deserialize_round_trip() {
        let dep: JobDependency = JobDependency::File {
            path: "/tmp/a.hql".into(),
        };
        let json: String = serde_json::to_string(&dep).unwrap();
        let decoded: JobDependency = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, dep);
    }
}
