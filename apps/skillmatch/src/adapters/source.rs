//! Document source — reads candidate documents from a directory.
//!
//! Plain-text formats are read as UTF-8. Everything else (PDF, DOCX, images)
//! is reported as unreadable with a user-facing message instead of aborting
//! the batch.

use std::path::Path;

use tracing::{info, warn};

use crate::errors::AppError;

const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "text"];

pub const LEGACY_DOC_ERROR: &str = "Old .doc format (Word 97-2003) is not supported. \
    Please save your resume as .docx format: \
    Open file in Word → File → Save As → Word Document (*.docx)";

pub const UNSUPPORTED_FORMAT_ERROR: &str =
    "Unsupported file format. Supported formats: TXT, MD (plain text)";

/// What could be read from one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentBody {
    Text(String),
    /// The file could not be turned into text; carries the reason.
    Unreadable(String),
}

/// One candidate document, identified by its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub source: String,
    pub body: DocumentBody,
}

impl SourceDocument {
    pub fn text(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            body: DocumentBody::Text(text.into()),
        }
    }

    pub fn unreadable(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            body: DocumentBody::Unreadable(reason.into()),
        }
    }
}

/// Reads every regular file in `dir`, sorted by file name.
///
/// Only a failure to list the directory is an error; per-file problems
/// become `DocumentBody::Unreadable`.
pub async fn load_documents(dir: &Path) -> Result<Vec<SourceDocument>, AppError> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let file_type = entry.file_type().await?;
        if file_type.is_file() {
            files.push(entry.path());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut documents = Vec::with_capacity(files.len());
    for path in files {
        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let document = read_document(&path, source).await;
        if let DocumentBody::Unreadable(reason) = &document.body {
            warn!(source = %document.source, "Skipping document text: {reason}");
        }
        documents.push(document);
    }

    info!("Loaded {} documents from {}", documents.len(), dir.display());
    Ok(documents)
}

async fn read_document(path: &Path, source: String) -> SourceDocument {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if extension == "doc" {
        return SourceDocument::unreadable(source, LEGACY_DOC_ERROR);
    }
    if !TEXT_EXTENSIONS.contains(&extension.as_str()) {
        return SourceDocument::unreadable(source, UNSUPPORTED_FORMAT_ERROR);
    }

    match tokio::fs::read(path).await {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => SourceDocument::text(source, text),
            Err(_) => SourceDocument::unreadable(source, "File is not valid UTF-8 text"),
        },
        Err(e) => SourceDocument::unreadable(source, format!("Could not read file: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_load_documents_sorted_and_classified() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b_resume.txt"), "Python developer").unwrap();
        fs::write(dir.path().join("a_notes.md"), "# Rust engineer").unwrap();
        fs::write(dir.path().join("c_old.doc"), [0xD0u8, 0xCF, 0x11, 0xE0]).unwrap();
        fs::write(dir.path().join("d_scan.PDF"), b"%PDF-1.4").unwrap();
        fs::write(dir.path().join("e_bad.txt"), [0xFFu8, 0xFE, 0x00]).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let docs = load_documents(dir.path()).await.unwrap();
        let names: Vec<&str> = docs.iter().map(|d| d.source.as_str()).collect();
        assert_eq!(
            names,
            ["a_notes.md", "b_resume.txt", "c_old.doc", "d_scan.PDF", "e_bad.txt"]
        );

        assert_eq!(docs[0].body, DocumentBody::Text("# Rust engineer".into()));
        assert_eq!(docs[1].body, DocumentBody::Text("Python developer".into()));
        assert_eq!(docs[2].body, DocumentBody::Unreadable(LEGACY_DOC_ERROR.into()));
        assert_eq!(
            docs[3].body,
            DocumentBody::Unreadable(UNSUPPORTED_FORMAT_ERROR.into())
        );
        assert!(matches!(docs[4].body, DocumentBody::Unreadable(_)));
    }

    #[tokio::test]
    async fn test_empty_file_is_text() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("blank.txt"), "").unwrap();

        let docs = load_documents(dir.path()).await.unwrap();
        assert_eq!(docs, vec![SourceDocument::text("blank.txt", "")]);
    }

    #[tokio::test]
    async fn test_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = load_documents(&missing).await.unwrap_err();
        assert_eq!(err.code(), "IO_ERROR");
    }
}
