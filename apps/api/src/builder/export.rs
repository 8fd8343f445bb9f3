use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::builder::validation::{validate_filename, FormError};
use crate::models::Resume;
use crate::render::{format_resume, to_json_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Text,
    Json,
}

impl ExportFormat {
    pub fn default_filename(self) -> &'static str {
        match self {
            ExportFormat::Text => "resume.txt",
            ExportFormat::Json => "resume.json",
        }
    }

    /// Renders the resume in this format.
    pub fn render(self, resume: &Resume) -> io::Result<String> {
        match self {
            ExportFormat::Text => Ok(format_resume(resume)),
            ExportFormat::Json => Ok(to_json_string(resume)?),
        }
    }
}

/// Joins a user-supplied bare file name onto the export directory.
/// `None` falls back to the format's default name.
pub fn resolve_export_path(
    export_dir: &Path,
    filename: Option<&str>,
    format: ExportFormat,
) -> Result<PathBuf, FormError> {
    let name = match filename {
        Some(name) => validate_filename(name)?,
        None => format.default_filename(),
    };
    Ok(export_dir.join(name))
}

/// Writes `contents` to `path` through a temp file in the same directory,
/// renamed into place once fully written. On error the destination is left
/// untouched.
///
/// A symlink at `path` is followed, so the link target is what gets replaced.
/// An existing file keeps its permissions; a new one gets the same mode a
/// plain `fs::write` would produce (0o666 minus the umask).
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let target = resolve_symlink(path);
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let existing = fs::metadata(&target).ok().map(|m| m.permissions());

    let mut builder = tempfile::Builder::new();
    builder.prefix(".resume-export");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir)?;
    if let Some(permissions) = existing {
        tmp.as_file().set_permissions(permissions)?;
    }

    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}

/// Follows a symlink at `path`. A dangling link is replaced as a regular file.
fn resolve_symlink(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

/// Saves the formatted text resume to `path`. Returns the number of bytes written.
pub fn save_text(resume: &Resume, path: &Path) -> io::Result<usize> {
    save(resume, path, ExportFormat::Text)
}

/// Saves the JSON resume to `path`. Returns the number of bytes written.
pub fn save_json(resume: &Resume, path: &Path) -> io::Result<usize> {
    save(resume, path, ExportFormat::Json)
}

fn save(resume: &Resume, path: &Path, format: ExportFormat) -> io::Result<usize> {
    let contents = format.render(resume)?;
    write_atomic(path, contents.as_bytes())?;
    info!("Saved {:?} resume to {}", format, path.display());
    Ok(contents.len())
}
