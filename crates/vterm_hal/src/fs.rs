//! Filesystem actions behind the built-in verbs
//!
//! Thin wrappers over std::fs that tag every failure with the operation and
//! the offending path. The builtins turn these results into the exact user
//! messages; nothing here prints.

use crate::error::{HalError, HalResult};
use std::fs;
use std::io;
use std::path::Path;

/// What `remove_file_or_tree` actually removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removed {
    File,
    Tree,
}

/// Create `path` as an empty file, truncating it if it already exists.
pub fn create_empty_file(path: &str) -> HalResult<()> {
    fs::File::create(path)
        .map(|_| ())
        .map_err(|e| HalError::io_error("create_empty_file", Some(path), e))
}

/// Read the whole file as UTF-8 text.
pub fn read_file(path: &str) -> HalResult<String> {
    fs::read_to_string(path).map_err(|e| HalError::io_error("read_file", Some(path), e))
}

/// Replace the file's content with `content`.
pub fn write_file(path: &str, content: &str) -> HalResult<()> {
    fs::write(path, content).map_err(|e| HalError::io_error("write_file", Some(path), e))
}

/// Remove a file, or a directory and everything under it.
pub fn remove_file_or_tree(path: &str) -> HalResult<Removed> {
    let target = Path::new(path);
    if target.is_file() {
        fs::remove_file(target)
            .map(|_| Removed::File)
            .map_err(|e| HalError::io_error("remove_file", Some(path), e))
    } else if target.is_dir() {
        fs::remove_dir_all(target)
            .map(|_| Removed::Tree)
            .map_err(|e| HalError::io_error("remove_tree", Some(path), e))
    } else {
        Err(HalError::io_error(
            "remove",
            Some(path),
            io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
        ))
    }
}

/// Create a single new directory.
pub fn make_directory(path: &str) -> HalResult<()> {
    fs::create_dir(path).map_err(|e| HalError::io_error("make_directory", Some(path), e))
}

/// Change the process-wide current directory.
pub fn change_directory(path: &str) -> HalResult<()> {
    std::env::set_current_dir(path)
        .map_err(|e| HalError::io_error("change_directory", Some(path), e))
}

/// List entry names in the current directory, in directory order.
pub fn list_directory() -> HalResult<Vec<String>> {
    let entries = fs::read_dir(".").map_err(|e| HalError::io_error("list_directory", None, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| HalError::io_error("list_directory", None, e))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Recursively copy the directory tree at `src` to `dst`.
///
/// `dst` must not exist yet, matching the usual copytree contract.
pub fn copy_tree(src: &str, dst: &str) -> HalResult<()> {
    let to = Path::new(dst);
    if to.exists() {
        return Err(HalError::io_error(
            "copy_tree",
            Some(dst),
            io::Error::new(io::ErrorKind::AlreadyExists, "destination already exists"),
        ));
    }
    copy_tree_inner(Path::new(src), to).map_err(|e| HalError::io_error("copy_tree", Some(src), e))
}

fn copy_tree_inner(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree_inner(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
