//! Application root resolution and output path defaults.

use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Fixed path segments under the application root
pub mod defaults {
    pub const OUTPUT_DIR: &str = "output";
    pub const NOTE_DIR: &str = "note";
    pub const EXPORT_IMAGE_DIR: &str = "export_image";
    pub const IMAGES_SUBDIR: &str = "images";
    pub const ATTACHMENTS_SUBDIR: &str = "attachments";
}

static APP_ROOT: OnceCell<PathBuf> = OnceCell::new();

/// Returns the application root directory, resolved once per process.
///
/// Release builds resolve to the directory containing the running
/// executable, so output lands next to the deployed binary. Dev builds
/// resolve to the crate manifest directory regardless of the working
/// directory at runtime.
pub fn app_root() -> &'static Path {
    APP_ROOT.get_or_init(resolve_app_root).as_path()
}

fn resolve_app_root() -> PathBuf {
    if cfg!(debug_assertions) {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    } else {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_root_is_memoized() {
        let first = app_root();
        let second = app_root();
        assert_eq!(first, second);
    }

    #[test]
    fn test_app_root_is_absolute() {
        assert!(app_root().is_absolute());
    }
}
