//! Conversion from a configured job to the submission payload.

use serde::{Deserialize, Serialize};

use crate::builder::HiveJob;

/// Job submission payload for the remote execution service API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    /// Job name for display and search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Compiled command-line argument string.
    pub command_args: String,
    /// Metadata tags, sorted.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    /// Staged filenames of the job's dependencies, in registration order.
    pub attachments: Vec<String>,
}

impl SubmitRequest {
    /// Serialize to JSON for API submission.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty JSON for debugging.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the submission payload for a configured job.
///
/// The job client pairs this payload with the resolved dependency files
/// (see [`crate::stage_dependencies`]) when it performs the actual upload
/// and submission.
///
/// # Arguments
/// * `job` - The fully configured job description
///
/// # Returns
/// SubmitRequest ready for the job client.
pub fn build_submit_request(job: &HiveJob) -> SubmitRequest {
    SubmitRequest {
        name: job.name().map(String::from),
        command_args: job.cmd_args(),
        tags: job.tags().iter().cloned().collect(),
        attachments: job
            .dependencies()
            .iter()
            .map(|dep| dep.staged_name())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_submit_request() {
        let job: HiveJob = HiveJob::new()
            .job_name("nightly rollup")
            .headers()
            .script("SELECT 1;")
            .property_file("/x/p.conf");

        let request: SubmitRequest = build_submit_request(&job);
        assert_eq!(request.name, Some("nightly rollup".into()));
        assert_eq!(
            request.command_args,
            "-i p.conf --hiveconf hive.cli.print.header=true -f script.hive"
        );
        assert_eq!(request.tags, vec!["headers".to_string()]);
        assert_eq!(
            request.attachments,
            vec!["script.hive".to_string(), "p.conf".to_string()]
        );
    }

    #[test]
    fn test_to_json_camel_case() {
        let request: SubmitRequest = SubmitRequest {
            name: None,
            command_args: "-f script.hive".into(),
            tags: vec![],
            attachments: vec!["script.hive".into()],
        };

        let json: String = request.to_json().unwrap();
        assert!(json.contains("commandArgs"));
        assert!(!json.contains("\"name\""));
        assert!(!json.contains("\"tags\""));
    }
}
