use crate::error::{Result, SpecKitError};
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_PROGRAM: &str = "specify";
pub const TEMP_SPEC_FILE: &str = "temp_spec.md";
pub const GENERATED_DIR: &str = "generated";

pub const WORKING_DIR_ENV: &str = "SPEC_KIT_WORKING_DIR";
pub const PROGRAM_ENV: &str = "SPEC_KIT_PROGRAM";

/// Where the `specify` tool saves the generated specification.
pub fn temp_spec_path(working_dir: &Path) -> PathBuf {
    working_dir.join(TEMP_SPEC_FILE)
}

/// Output directory used by `implement` when the caller gives none.
pub fn default_output_dir(working_dir: &Path) -> PathBuf {
    working_dir.join(GENERATED_DIR)
}

/// Directory `init_project` creates. Absolute names and `..` segments are
/// rejected so the result always stays under `working_dir`.
pub fn project_dir(working_dir: &Path, project_name: &str) -> Result<PathBuf> {
    let name = Path::new(project_name);
    let contained = name
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if !contained || !name.components().any(|c| matches!(c, Component::Normal(_))) {
        return Err(SpecKitError::InvalidProjectName(project_name.to_string()));
    }
    Ok(working_dir.join(name))
}
