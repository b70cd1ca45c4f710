use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// A single file-system entry that can be offered as an @mention.
///
/// Candidates are produced in bulk by the scanner (or supplied by the host)
/// and are never mutated by the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// Absolute path using the platform separator
    pub full_path: Utf8PathBuf,
    /// Final path segment (file or directory name)
    pub name: String,
    /// Path relative to the scan root, always `/`-separated
    pub relative_path: String,
    pub is_directory: bool,
}

impl Candidate {
    pub fn new(
        full_path: impl Into<Utf8PathBuf>,
        relative_path: impl Into<String>,
        is_directory: bool,
    ) -> Self {
        let full_path = full_path.into();
        let relative_path = relative_path.into();
        let name = relative_path
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .or_else(|| full_path.file_name())
            .unwrap_or_default()
            .to_string();

        Candidate {
            full_path,
            name,
            relative_path,
            is_directory,
        }
    }

    /// Builds a candidate from a path found under `root`.
    ///
    /// Returns `None` when `path` is not inside `root` or is `root` itself.
    pub fn from_root(root: &Utf8Path, path: Utf8PathBuf, is_directory: bool) -> Option<Self> {
        let relative_path = path
            .strip_prefix(root)
            .ok()?
            .components()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join("/");
        if relative_path.is_empty() {
            return None;
        }
        Some(Candidate::new(path, relative_path, is_directory))
    }

    /// Full path as a plain string, the form the matcher scores.
    pub fn full_path_str(&self) -> &str {
        self.full_path.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_relative_path() {
        let candidate = Candidate::new("/work/app/src/index.ts", "src/index.ts", false);
        assert_eq!(candidate.name, "index.ts");
        assert_eq!(candidate.relative_path, "src/index.ts");
        assert!(!candidate.is_directory);
    }

    #[test]
    fn test_name_falls_back_to_full_path() {
        let candidate = Candidate::new("/work/app/docs", "", true);
        assert_eq!(candidate.name, "docs");
    }

    #[test]
    fn test_from_root() {
        let root = Utf8Path::new("/work/app");
        let candidate =
            Candidate::from_root(root, Utf8PathBuf::from("/work/app/src/lib.rs"), false).unwrap();
        assert_eq!(candidate.relative_path, "src/lib.rs");
        assert_eq!(candidate.name, "lib.rs");
        assert_eq!(candidate.full_path_str(), "/work/app/src/lib.rs");
    }

    #[test]
    fn test_from_root_rejects_outside_paths() {
        let root = Utf8Path::new("/work/app");
        assert!(Candidate::from_root(root, Utf8PathBuf::from("/etc/hosts"), false).is_none());
        assert!(Candidate::from_root(root, Utf8PathBuf::from("/work/app"), true).is_none());
    }
}
