//! Local staging of job dependencies.
//!
//! The job client resolves each dependency descriptor before submission:
//! file dependencies are copied from their local path, inline dependencies
//! are written out from their content. Staging is local filesystem only;
//! the upload itself belongs to the job client.

use std::fs;
use std::path::{Path, PathBuf};

use hive_submit_model::JobDependency;

use crate::error::StagingError;

/// Materialize a dependency list into a staging directory.
///
/// The directory is created if it does not exist. Dependencies are staged
/// in list order; a later dependency with the same staged name overwrites
/// an earlier one, mirroring how repeated registrations behave in the
/// builder.
///
/// # Arguments
/// * `dependencies` - Dependency descriptors in registration order
/// * `staging_dir` - Directory to materialize the files into
///
/// # Returns
/// Paths of the staged files, in the same order as `dependencies`.
///
/// # Errors
/// - `StagingError::MissingDependency` if a file dependency no longer exists
/// - `StagingError::Io` if the copy or write fails
pub fn stage_dependencies(
    dependencies: &[JobDependency],
    staging_dir: &Path,
) -> Result<Vec<PathBuf>, StagingError> {
    fs::create_dir_all(staging_dir).map_err(|source| StagingError::Io {
        path: staging_dir.display().to_string(),
        source,
    })?;

    let mut staged: Vec<PathBuf> = Vec::with_capacity(dependencies.len());

    for dependency in dependencies {
        let dest: PathBuf = staging_dir.join(dependency.staged_name());
        match dependency {
            JobDependency::File { path } => {
                if !path.is_file() {
                    return Err(StagingError::MissingDependency {
                        path: path.display().to_string(),
                    });
                }
                fs::copy(path, &dest).map_err(|source| StagingError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                tracing::debug!(src = %path.display(), dest = %dest.display(), "copied file dependency");
            }
            JobDependency::Inline { name, data } => {
                fs::write(&dest, data).map_err(|source| StagingError::Io {
                    path: dest.display().to_string(),
                    source,
                })?;
                tracing::debug!(name = %name, bytes = data.len(), "materialized inline dependency");
            }
        }
        staged.push(dest);
    }

    Ok(staged)
}
