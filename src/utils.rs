use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use shellexpand::tilde;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};

/// Expands a leading `~` to the home directory
pub fn expand_path(path: &str) -> String {
    tilde(path).to_string()
}

/// Joins a relative path onto the base directory, keeps absolute paths
pub fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Platform folders of the application, `None` without a home directory
pub(crate) fn find_project_folder() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}
