//! Text extraction from stored documents, dispatched by file extension.

use std::path::Path;

use anyhow::Result;
use tracing::warn;

/// Extracts plain text from a stored file.
///
/// Dispatch is by case-insensitive extension: `.pdf` → PDF text layer,
/// `.docx` → Office document paragraphs, anything else → raw UTF-8 read with
/// undecodable bytes dropped. Extraction failures are not errors: corrupt or
/// unsupported input yields `""`, and callers must branch on emptiness.
/// Image-only PDFs legitimately yield empty text; there is no OCR fallback.
pub fn extract_text(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let result = match ext.as_str() {
        "pdf" => extract_pdf(path),
        "docx" => extract_docx(path),
        _ => extract_plain(path),
    };

    match result {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "text extraction failed");
            String::new()
        }
    }
}

fn extract_pdf(path: &Path) -> Result<String> {
    // pdf-extract panics on some malformed inputs; the contract here is
    // "never raise", so panics are contained and mapped to empty text.
    std::panic::catch_unwind(|| pdf_extract::extract_text(path))
        .map_err(|_| anyhow::anyhow!("PDF extraction panicked"))?
        .map_err(|e| anyhow::anyhow!("PDF extraction failed: {e}"))
}

fn extract_docx(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let docx =
        docx_rs::read_docx(&bytes).map_err(|e| anyhow::anyhow!("DOCX parse failed: {e:?}"))?;

    let mut text = String::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            for para_child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = para_child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}

fn extract_plain(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_plain_text_file_reads_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Jane Doe has 5 years of experience").unwrap();
        assert_eq!(extract_text(&path), "Jane Doe has 5 years of experience");
    }

    #[test]
    fn test_unknown_extension_falls_back_to_plain_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.md");
        std::fs::write(&path, "# Heading").unwrap();
        assert_eq!(extract_text(&path), "# Heading");
    }

    #[test]
    fn test_undecodable_bytes_are_dropped_not_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, [b'o', b'k', 0xFF, 0xFE, b'!']).unwrap();
        let text = extract_text(&path);
        assert!(text.starts_with("ok"));
        assert!(text.ends_with('!'));
    }

    #[test]
    fn test_missing_file_yields_empty_text() {
        let dir = tempdir().unwrap();
        assert_eq!(extract_text(&dir.path().join("nope.txt")), "");
    }

    #[test]
    fn test_corrupt_pdf_yields_empty_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"this is not a pdf at all").unwrap();
        assert_eq!(extract_text(&path), "");
    }

    #[test]
    fn test_corrupt_docx_yields_empty_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.docx");
        std::fs::write(&path, b"not a zip archive").unwrap();
        assert_eq!(extract_text(&path), "");
    }

    #[test]
    fn test_extension_dispatch_is_case_insensitive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.PDF");
        std::fs::write(&path, b"garbage").unwrap();
        // Uppercase .PDF must hit the PDF path (and recover to empty), not
        // the plain-text fallback that would echo the garbage back.
        assert_eq!(extract_text(&path), "");
    }

    #[test]
    fn test_zero_byte_file_yields_empty_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, b"").unwrap();
        assert_eq!(extract_text(&path), "");
    }
}
