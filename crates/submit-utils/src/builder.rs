//! Fluent Hive job builder.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use hive_submit_model::{JobDependency, OrderedParams, ScriptSource, DEFAULT_SCRIPT_NAME};

use crate::args::compile_arguments;

/// A Hive job description.
///
/// A job is configured through chained calls during a single construction
/// phase and read once at submission time, when the job client requests the
/// compiled argument string and the dependency list. The builder is a plain
/// value with no internal locking; sharing one across threads requires
/// external synchronization.
///
/// # Example
///
/// ```
/// use hive_submit_utils::HiveJob;
///
/// let job = HiveJob::new()
///     .job_name("hive example")
///     .script("SELECT * FROM events;")
///     .parameter("param_1", "value_1")
///     .property("mapred.foo", "fizz")
///     .property("mapred.bar", "buzz");
/// ```
#[derive(Debug, Clone)]
pub struct HiveJob {
    name: Option<String>,
    script_filename: String,
    parameters: OrderedParams,
    properties: OrderedParams,
    property_file: Option<PathBuf>,
    // Index of the property-file entry in `dependencies`, so a later
    // property_file call replaces it in place instead of appending.
    property_file_dep: Option<usize>,
    dependencies: Vec<JobDependency>,
    tags: BTreeSet<String>,
    arguments_override: Option<String>,
}

impl Default for HiveJob {
    fn default() -> Self {
        Self {
            name: None,
            script_filename: DEFAULT_SCRIPT_NAME.to_string(),
            parameters: OrderedParams::new(),
            properties: OrderedParams::new(),
            property_file: None,
            property_file_dep: None,
            dependencies: Vec::new(),
            tags: BTreeSet::new(),
            arguments_override: None,
        }
    }
}

impl HiveJob {
    /// Create an empty job description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the job name used for metadata on the execution service.
    pub fn job_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the script to run for the job.
    ///
    /// The argument is either a path to an existing script file or the
    /// script text itself; [`ScriptSource::classify`] decides which. A file
    /// keeps its base name, inline text is staged under the default
    /// `script.hive` name.
    ///
    /// Each call appends one dependency. Calling `script` again replaces the
    /// script filename but leaves previously appended script dependencies in
    /// the list.
    pub fn script(mut self, script: impl Into<String>) -> Self {
        let source: ScriptSource = ScriptSource::classify(script);
        self.script_filename = source.file_name();
        self.dependencies.push(source.into_dependency());
        self
    }

    /// Alias for [`HiveJob::script`].
    pub fn query(self, query: impl Into<String>) -> Self {
        self.script(query)
    }

    /// Set a query-level substitution parameter, rendered as
    /// `-d name=value`.
    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.set(name, value);
        self
    }

    /// Set a configuration property, rendered as `--hiveconf name=value`.
    pub fn property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.set(name, value);
        self
    }

    /// Alias for [`HiveJob::property`].
    pub fn hiveconf(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.property(name, value)
    }

    /// Set a property file supplying a batch of properties, rendered as
    /// `-i basename`.
    ///
    /// The file is registered as a job dependency. Unlike `script`, a later
    /// call replaces both the recorded path and the previously registered
    /// dependency.
    pub fn property_file(mut self, path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        let dep: JobDependency = JobDependency::File { path: path.clone() };
        match self.property_file_dep {
            Some(index) => self.dependencies[index] = dep,
            None => {
                self.dependencies.push(dep);
                self.property_file_dep = Some(self.dependencies.len() - 1);
            }
        }
        self.property_file = Some(path);
        self
    }

    /// Enable `hive.cli.print.header` so results written to stdout carry
    /// column headers, and tag the job accordingly.
    pub fn headers(mut self) -> Self {
        self.tags.insert("headers".to_string());
        self.property("hive.cli.print.header", "true")
    }

    /// Attach a metadata tag to the job.
    pub fn tag(mut self, label: impl Into<String>) -> Self {
        self.tags.insert(label.into());
        self
    }

    /// Set the full command-line argument string explicitly.
    ///
    /// When set, [`HiveJob::cmd_args`] returns this string verbatim and none
    /// of the structured fields are consulted.
    pub fn command_arguments(mut self, args: impl Into<String>) -> Self {
        self.arguments_override = Some(args.into());
        self
    }

    /// The compiled command-line argument string.
    ///
    /// Pure and idempotent for a given job state; see
    /// [`compile_arguments`] for the clause layout.
    pub fn cmd_args(&self) -> String {
        compile_arguments(self)
    }

    /// Dependencies to stage alongside the job, in registration order.
    pub fn dependencies(&self) -> &[JobDependency] {
        &self.dependencies
    }

    /// Metadata tags attached to the job.
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// The job name, if one was set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Filename of the script as staged alongside the job.
    pub fn script_filename(&self) -> &str {
        &self.script_filename
    }

    /// Query-level substitution parameters.
    pub fn parameters(&self) -> &OrderedParams {
        &self.parameters
    }

    /// Configuration properties.
    pub fn properties(&self) -> &OrderedParams {
        &self.properties
    }

    /// Path of the property file, if one was set.
    pub fn property_file_path(&self) -> Option<&Path> {
        self.property_file.as_deref()
    }

    /// The explicit argument override, if one was set.
    pub fn arguments_override(&self) -> Option<&str> {
        self.arguments_override.as_deref()
    }
}
