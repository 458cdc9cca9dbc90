//! Filesystem helpers for build staging.
//!
//! These are replace-semantics copy/move primitives: an existing
//! destination file is removed first, a missing source is a silent no-op,
//! and source == destination is a no-op. None of them recurse; directory
//! variants touch only the first level.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Create a directory only if it does not exist yet.
pub fn create_dir_if_missing(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Copy `file_name` from `src` to `dest`, replacing any existing copy.
pub fn copy_file_replacing(src: &Path, dest: &Path, file_name: &str) -> Result<()> {
    let src_file = src.join(file_name);
    let dest_file = dest.join(file_name);
    if !src_file.is_file() || src_file == dest_file {
        return Ok(());
    }
    if dest_file.exists() {
        fs::remove_file(&dest_file)?;
    }
    fs::copy(&src_file, &dest_file)?;
    Ok(())
}

/// Move `file_name` from `src` to `dest`, replacing any existing copy.
pub fn move_file_replacing(src: &Path, dest: &Path, file_name: &str) -> Result<()> {
    let src_file = src.join(file_name);
    let dest_file = dest.join(file_name);
    if !src_file.is_file() || src_file == dest_file {
        return Ok(());
    }
    if dest_file.exists() {
        fs::remove_file(&dest_file)?;
    }
    // rename fails across filesystems; fall back to copy + remove.
    if fs::rename(&src_file, &dest_file).is_err() {
        fs::copy(&src_file, &dest_file)?;
        fs::remove_file(&src_file)?;
    }
    Ok(())
}

/// Copy every first-level file from `src` into `dest`, replacing.
pub fn copy_all_files_replacing(src: &Path, dest: &Path) -> Result<()> {
    for_each_first_level_file(src, dest, |name| copy_file_replacing(src, dest, name))
}

/// Move every first-level file from `src` into `dest`, replacing.
pub fn move_all_files_replacing(src: &Path, dest: &Path) -> Result<()> {
    for_each_first_level_file(src, dest, |name| move_file_replacing(src, dest, name))
}

/// Copy first-level files with the given extension (with leading dot).
pub fn copy_files_with_extension_replacing(src: &Path, dest: &Path, ext: &str) -> Result<()> {
    for_each_first_level_file(src, dest, |name| {
        if has_extension(name, ext) {
            copy_file_replacing(src, dest, name)
        } else {
            Ok(())
        }
    })
}

/// Move first-level files with the given extension (with leading dot).
pub fn move_files_with_extension_replacing(src: &Path, dest: &Path, ext: &str) -> Result<()> {
    for_each_first_level_file(src, dest, |name| {
        if has_extension(name, ext) {
            move_file_replacing(src, dest, name)
        } else {
            Ok(())
        }
    })
}

fn has_extension(file_name: &str, dotted_ext: &str) -> bool {
    Path::new(file_name)
        .extension()
        .is_some_and(|ext| format!(".{}", ext.to_string_lossy()) == dotted_ext)
}

fn for_each_first_level_file(
    src: &Path,
    dest: &Path,
    mut op: impl FnMut(&str) -> Result<()>,
) -> Result<()> {
    if !src.exists() || src == dest {
        return Ok(());
    }
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        op(&name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn copy_replaces_existing_destination() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(src.join("engine.dll"), "new").unwrap();
        fs::write(dest.join("engine.dll"), "old").unwrap();

        copy_file_replacing(&src, &dest, "engine.dll").unwrap();

        assert_eq!(fs::read_to_string(dest.join("engine.dll")).unwrap(), "new");
        assert!(src.join("engine.dll").exists());
    }

    #[test]
    fn missing_source_is_a_noop() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dest).unwrap();

        copy_file_replacing(&src, &dest, "nope.dll").unwrap();
        move_file_replacing(&src, &dest, "nope.dll").unwrap();
        copy_all_files_replacing(&dir.path().join("missing"), &dest).unwrap();

        assert!(fs::read_dir(&dest).unwrap().next().is_none());
    }

    #[test]
    fn move_removes_the_source() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(src.join("Engine.lib"), "lib").unwrap();

        move_file_replacing(&src, &dest, "Engine.lib").unwrap();

        assert!(!src.join("Engine.lib").exists());
        assert!(dest.join("Engine.lib").exists());
    }

    #[test]
    fn extension_filter_only_touches_matching_files() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(src.join("engine.dll"), "").unwrap();
        fs::write(src.join("game.exe"), "").unwrap();

        copy_files_with_extension_replacing(&src, &dest, ".dll").unwrap();

        assert!(dest.join("engine.dll").exists());
        assert!(!dest.join("game.exe").exists());
    }

    #[test]
    fn directory_copy_is_first_level_only() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(src.join("top.txt"), "").unwrap();
        fs::write(src.join("nested").join("deep.txt"), "").unwrap();

        copy_all_files_replacing(&src, &dest).unwrap();

        assert!(dest.join("top.txt").exists());
        assert!(!dest.join("deep.txt").exists());
        assert!(!dest.join("nested").exists());
    }
}
