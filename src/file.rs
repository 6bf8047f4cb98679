// src/file.rs

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Create/truncate `path` and write `bytes`, creating missing parent dirs.
pub fn write_output(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let mut out = BufWriter::new(fs::File::create(path)?);
    out.write_all(bytes)?;
    out.flush()
}

/// `-o` value → concrete file path.
/// Empty means `default_filename` in the working dir; a directory (or a
/// trailing separator) means `default_filename` inside it.
pub fn resolve_single_out_path(user_o: &str, default_filename: &str) -> io::Result<PathBuf> {
    if user_o.is_empty() {
        return Ok(PathBuf::from(default_filename));
    }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(user_o) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(raw: &str) -> bool {
    raw.ends_with('/') || raw.ends_with('\\')
}
