//! Engine discovery: beside the executable first, then PATH.

use std::env;
use std::path::{Path, PathBuf};

/// Find the engine binary.
///
/// A name containing a path separator is treated as an explicit location
/// and only checked for existence. A bare name is looked for in the
/// directory holding the current executable, then in each PATH entry.
pub fn locate_engine(binary: &str) -> Option<PathBuf> {
    let explicit = Path::new(binary);
    if explicit.components().count() > 1 {
        return explicit.is_file().then(|| explicit.to_path_buf());
    }

    let file_name = platform_exe_name(binary);
    if let Some(found) = beside_current_exe(&file_name) {
        return Some(found);
    }
    let path_var = env::var_os("PATH")?;
    find_in_dirs(&file_name, env::split_paths(&path_var))
}

/// Check the directory containing the running executable.
fn beside_current_exe(file_name: &str) -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    let candidate = exe.parent()?.join(file_name);
    candidate.is_file().then_some(candidate)
}

/// First directory in the iterator containing `file_name`.
fn find_in_dirs(file_name: &str, dirs: impl Iterator<Item = PathBuf>) -> Option<PathBuf> {
    dirs.map(|dir| dir.join(file_name))
        .find(|candidate| candidate.is_file())
}

fn platform_exe_name(binary: &str) -> String {
    if cfg!(windows) {
        format!("{}.exe", binary)
    } else {
        binary.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_binary_in_search_dirs() {
        let empty = tempdir().unwrap();
        let with_engine = tempdir().unwrap();
        fs::write(with_engine.path().join("ffmpeg"), b"").unwrap();

        let dirs = vec![
            empty.path().to_path_buf(),
            with_engine.path().to_path_buf(),
        ];
        let found = find_in_dirs("ffmpeg", dirs.into_iter()).unwrap();
        assert_eq!(found, with_engine.path().join("ffmpeg"));
    }

    #[test]
    fn missing_binary_yields_none() {
        let empty = tempdir().unwrap();
        assert!(find_in_dirs("ffmpeg", vec![empty.path().to_path_buf()].into_iter()).is_none());
    }

    #[test]
    fn explicit_path_bypasses_search() {
        let dir = tempdir().unwrap();
        let engine = dir.path().join("my-ffmpeg");
        fs::write(&engine, b"").unwrap();

        let found = locate_engine(engine.to_str().unwrap()).unwrap();
        assert_eq!(found, engine);

        let missing = dir.path().join("absent");
        assert!(locate_engine(missing.to_str().unwrap()).is_none());
    }
}
