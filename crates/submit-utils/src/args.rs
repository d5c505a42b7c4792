//! Command-line argument compilation.
//!
//! Serializes a configured job into the single argument string the remote
//! execution service hands to the Hive command line. The clause order is a
//! wire contract with the downstream command interpreter and must not
//! change: property file, properties, parameters, script.

use std::path::Path;

use hive_submit_model::OrderedParams;

use crate::builder::HiveJob;

/// Compile a job description into its command-line argument string.
///
/// If an explicit override was set via [`HiveJob::command_arguments`], it is
/// returned verbatim and no structured field is consulted. Otherwise the
/// non-empty clauses are emitted in wire order, joined by single spaces:
///
/// 1. `-i <basename>` for the property file, if set
/// 2. `--hiveconf <name>=<value>` per property, insertion order
/// 3. `-d <name>=<value>` per parameter, insertion order
/// 4. `-f <script_filename>`, always
///
/// Compilation performs no I/O and is idempotent for a given job state.
///
/// # Arguments
/// * `job` - The fully configured job description
///
/// # Returns
/// The argument string, with no leading or trailing whitespace.
pub fn compile_arguments(job: &HiveJob) -> String {
    if let Some(args) = job.arguments_override() {
        return args.to_string();
    }

    let mut clauses: Vec<String> = Vec::new();

    if let Some(clause) = property_file_clause(job.property_file_path()) {
        clauses.push(clause);
    }
    clauses.extend(property_clauses(job.properties()));
    clauses.extend(parameter_clauses(job.parameters()));
    clauses.push(format!("-f {}", job.script_filename()));

    clauses.join(" ")
}

/// Emit the `-i` clause for the property file, using its base name.
fn property_file_clause(path: Option<&Path>) -> Option<String> {
    path.map(|path| {
        let basename: String = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        format!("-i {}", basename)
    })
}

/// Emit one `--hiveconf` clause per property.
///
/// Property values are never quoted, even when they contain spaces.
fn property_clauses(properties: &OrderedParams) -> Vec<String> {
    properties
        .iter()
        .map(|(name, value)| format!("--hiveconf {}={}", name, value))
        .collect()
}

/// Emit one `-d` clause per parameter.
///
/// A value is wrapped in double quotes only when it contains a literal
/// space character.
fn parameter_clauses(parameters: &OrderedParams) -> Vec<String> {
    parameters
        .iter()
        .map(|(name, value)| {
            if value.contains(' ') {
                format!("-d {}=\"{}\"", name, value)
            } else {
                format!("-d {}={}", name, value)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_job_emits_script_clause_only() {
        let job: HiveJob = HiveJob::new();
        assert_eq!(compile_arguments(&job), "-f script.hive");
    }

    #[test]
    fn test_properties_in_insertion_order() {
        let job: HiveJob = HiveJob::new().property("a", "1").property("b", "2");
        assert_eq!(
            compile_arguments(&job),
            "--hiveconf a=1 --hiveconf b=2 -f script.hive"
        );
    }

    #[test]
    fn test_property_values_never_quoted() {
        let job: HiveJob = HiveJob::new().property("greeting", "hello world");
        assert_eq!(
            compile_arguments(&job),
            "--hiveconf greeting=hello world -f script.hive"
        );
    }

    #[test]
    fn test_parameter_value_with_space_is_quoted() {
        let job: HiveJob = HiveJob::new().parameter("p", "hello world");
        assert_eq!(compile_arguments(&job), "-d p=\"hello world\" -f script.hive");
    }

    #[test]
    fn test_parameter_value_without_space_is_unquoted() {
        let job: HiveJob = HiveJob::new().parameter("p", "x");
        assert_eq!(compile_arguments(&job), "-d p=x -f script.hive");
    }

    #[test]
    fn test_property_file_uses_basename() {
        let job: HiveJob = HiveJob::new().property_file("/x/p.conf");
        assert_eq!(compile_arguments(&job), "-i p.conf -f script.hive");
    }

    #[test]
    fn test_clause_order_is_fixed() {
        let job: HiveJob = HiveJob::new()
            .parameter("k", "v 1")
            .property("foo", "bar")
            .property_file("/x/p.conf")
            .script("SELECT *;");
        assert_eq!(
            compile_arguments(&job),
            "-i p.conf --hiveconf foo=bar -d k=\"v 1\" -f script.hive"
        );
    }

    #[test]
    fn test_override_skips_structured_fields() {
        let job: HiveJob = HiveJob::new()
            .property("foo", "bar")
            .command_arguments("  exactly as given  ");
        assert_eq!(compile_arguments(&job), "  exactly as given  ");
    }
}
