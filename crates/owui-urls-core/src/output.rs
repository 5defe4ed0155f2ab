//! Output file naming and writing.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::origin::Origin;

/// Default prefix for generated files.
pub const DEFAULT_FILE_PREFIX: &str = "owui-urls";

/// Document encoding, which also picks the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }

    /// Human label used in progress and summary lines.
    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "Markdown",
            OutputFormat::Json => "JSON",
        }
    }
}

/// Filesystem-safe stem for an origin.
///
/// Strips the scheme prefix and replaces `/` and `:` with `-`, so
/// `https://chat.example.com:8080` becomes `chat.example.com-8080`.
pub fn file_stem(origin: &Origin) -> String {
    origin
        .as_str()
        .replace("https://", "")
        .replace("http://", "")
        .replace(['/', ':'], "-")
}

/// `<prefix>-<stem>.<ext>`
pub fn file_name(prefix: &str, origin: &Origin, format: OutputFormat) -> String {
    format!("{}-{}.{}", prefix, file_stem(origin), format.extension())
}

/// Write `content` into `dir`, overwriting any existing file, and return its absolute path.
pub fn write_document(
    dir: &Path,
    prefix: &str,
    origin: &Origin,
    format: OutputFormat,
    content: &str,
) -> Result<PathBuf> {
    let path = dir.join(file_name(prefix, origin, format));
    fs::write(&path, content).with_context(|| format!("write {}", path.display()))?;
    let abs = std::path::absolute(&path)
        .with_context(|| format!("resolve absolute path of {}", path.display()))?;
    tracing::info!("wrote {} document to {}", format.label(), abs.display());
    Ok(abs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_with_port() {
        let origin = Origin::normalize("https://chat.example.com:8080/");
        assert_eq!(file_stem(&origin), "chat.example.com-8080");
        assert_eq!(
            file_name(DEFAULT_FILE_PREFIX, &origin, OutputFormat::Markdown),
            "owui-urls-chat.example.com-8080.md"
        );
        assert_eq!(
            file_name(DEFAULT_FILE_PREFIX, &origin, OutputFormat::Json),
            "owui-urls-chat.example.com-8080.json"
        );
    }

    #[test]
    fn stem_http_and_degenerate() {
        assert_eq!(file_stem(&Origin::normalize("http://10.0.0.5:3000")), "10.0.0.5-3000");
        assert_eq!(file_stem(&Origin::normalize("")), "");
    }

    #[test]
    fn write_overwrites_and_returns_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let origin = Origin::normalize("chat.example.com");

        let first =
            write_document(dir.path(), "owui-urls", &origin, OutputFormat::Json, "old").unwrap();
        let second =
            write_document(dir.path(), "owui-urls", &origin, OutputFormat::Json, "new").unwrap();

        assert_eq!(first, second);
        assert!(second.is_absolute());
        assert_eq!(
            second.file_name().unwrap(),
            "owui-urls-chat.example.com.json"
        );
        assert_eq!(fs::read_to_string(&second).unwrap(), "new");
    }

    #[test]
    fn write_error_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let origin = Origin::normalize("chat.example.com");
        let err = write_document(&missing, "owui-urls", &origin, OutputFormat::Markdown, "x")
            .unwrap_err();
        assert!(format!("{err:#}").contains("owui-urls-chat.example.com.md"));
    }
}
