use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE: &str = "icon.png";
pub const DEFAULT_OUTPUT_DIR: &str = "CastReader/Assets.xcassets/AppIcon.appiconset";

/// Directory containing the running executable, or `.` if it cannot be found.
fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Source image and output directory for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub source: PathBuf,
    pub output_dir: PathBuf,
}

impl Paths {
    /// Fills in missing arguments with defaults next to the program.
    pub fn resolve(source: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        Self::resolve_in(&program_dir(), source, output_dir)
    }

    pub fn resolve_in(base: &Path, source: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        Self {
            source: source.unwrap_or_else(|| base.join(DEFAULT_SOURCE)),
            output_dir: output_dir.unwrap_or_else(|| base.join(DEFAULT_OUTPUT_DIR)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Paths::resolve_in(Path::new("/opt/tool"), None, None);
        assert_eq!(p.source, PathBuf::from("/opt/tool/icon.png"));
        assert_eq!(
            p.output_dir,
            PathBuf::from("/opt/tool/CastReader/Assets.xcassets/AppIcon.appiconset")
        );
    }

    #[test]
    fn test_explicit_paths_win() {
        let p = Paths::resolve_in(
            Path::new("/opt/tool"),
            Some("art/logo.png".into()),
            Some("out".into()),
        );
        assert_eq!(p.source, PathBuf::from("art/logo.png"));
        assert_eq!(p.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_output_only_default() {
        let p = Paths::resolve_in(Path::new("base"), Some("a.png".into()), None);
        assert_eq!(p.output_dir, Path::new("base").join(DEFAULT_OUTPUT_DIR));
    }
}
