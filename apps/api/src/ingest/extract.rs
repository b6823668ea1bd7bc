//! Plain-text extraction from uploaded résumé documents (PDF and DOCX).

use std::io::{Cursor, Read};
use std::panic::{self, AssertUnwindSafe};

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Detects the kind from a file name's extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let lower = file_name.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(DocumentKind::Pdf)
        } else if lower.ends_with(".docx") {
            Some(DocumentKind::Docx)
        } else {
            None
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported document '{0}': upload a .pdf or .docx file")]
    UnsupportedFormat(String),

    #[error("Error extracting PDF text: {0}")]
    Pdf(String),

    #[error("Error extracting DOCX text: {0}")]
    Docx(String),
}

/// Extracts plain text from an uploaded file. The kind is chosen by file extension.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
    let kind = DocumentKind::from_file_name(file_name)
        .ok_or_else(|| ExtractionError::UnsupportedFormat(file_name.to_string()))?;

    let text = match kind {
        DocumentKind::Pdf => extract_pdf_text(bytes)?,
        DocumentKind::Docx => extract_docx_text(bytes)?,
    };
    debug!(
        "Extracted {} chars from {:?} document '{}'",
        text.len(),
        kind,
        file_name
    );
    Ok(text)
}

/// `pdf-extract` panics on some malformed inputs; those are reported as extraction errors.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(bytes)
    }));

    match outcome {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractionError::Pdf(e.to_string())),
        Err(_) => Err(ExtractionError::Pdf("malformed PDF".to_string())),
    }
}

pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::Docx(e.to_string()))?;
    let mut part = archive
        .by_name(DOCX_BODY_PART)
        .map_err(|e| ExtractionError::Docx(format!("{DOCX_BODY_PART}: {e}")))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Docx(e.to_string()))?;

    docx_xml_to_text(&xml)
}

/// Walks a WordprocessingML body: text of `<w:t>` runs, a newline per paragraph,
/// and whitespace for breaks and tabs inside runs whatever their attributes.
/// Tab stops declared in paragraph properties sit outside runs and emit nothing.
fn docx_xml_to_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::with_capacity(xml.len() / 4);
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:r" => run_depth += 1,
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:r" => run_depth = run_depth.saturating_sub(1),
                b"w:t" => in_text = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:p" => text.push('\n'),
                b"w:tab" if run_depth > 0 => text.push('\t'),
                b"w:br" | b"w:cr" if run_depth > 0 => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text => match e.unescape() {
                Ok(decoded) => text.push_str(&decoded),
                // An unknown entity leaves the run undecoded.
                Err(_) => text.push_str(&String::from_utf8_lossy(&e)),
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractionError::Docx(format!(
                    "{DOCX_BODY_PART} at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(text.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn build_docx(document_xml: &str) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut zip = zip::ZipWriter::new(&mut buffer);
            let options = zip::write::SimpleFileOptions::default();
            zip.start_file("[Content_Types].xml", options).unwrap();
            zip.write_all(b"<Types/>").unwrap();
            zip.start_file(DOCX_BODY_PART, options).unwrap();
            zip.write_all(document_xml.as_bytes()).unwrap();
            zip.finish().unwrap();
        }
        buffer.into_inner()
    }

    #[test]
    fn test_document_kind_from_file_name() {
        assert_eq!(DocumentKind::from_file_name("cv.PDF"), Some(DocumentKind::Pdf));
        assert_eq!(
            DocumentKind::from_file_name("my resume.docx"),
            Some(DocumentKind::Docx)
        );
        assert_eq!(DocumentKind::from_file_name("resume.doc"), None);
        assert_eq!(DocumentKind::from_file_name("resume.txt"), None);
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let err = extract_text("resume.txt", b"python").unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat(name) if name == "resume.txt"));
    }

    #[test]
    fn test_docx_paragraphs_and_runs() {
        let xml = r#"<w:document><w:body>
            <w:p><w:r><w:t>Python &amp; Django</w:t></w:r><w:r><w:t xml:space="preserve"> developer</w:t></w:r></w:p>
            <w:p><w:r><w:t>Docker</w:t><w:tab/><w:t>AWS</w:t></w:r></w:p>
        </w:body></w:document>"#;
        let text = extract_text("cv.docx", &build_docx(xml)).unwrap();
        assert_eq!(text, "Python & Django developer\nDocker\tAWS");
    }

    #[test]
    fn test_docx_without_body_part_fails() {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut zip = zip::ZipWriter::new(&mut buffer);
            zip.start_file("other.xml", zip::write::SimpleFileOptions::default())
                .unwrap();
            zip.write_all(b"<x/>").unwrap();
            zip.finish().unwrap();
        }
        let err = extract_docx_text(&buffer.into_inner()).unwrap_err();
        assert!(matches!(err, ExtractionError::Docx(_)));
    }

    #[test]
    fn test_garbage_docx_fails() {
        assert!(matches!(
            extract_text("cv.docx", b"not a zip archive"),
            Err(ExtractionError::Docx(_))
        ));
    }

    #[test]
    fn test_garbage_pdf_fails_without_panicking() {
        let err = extract_text("cv.pdf", b"%PDF-1.4 truncated").unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
        assert!(err.to_string().starts_with("Error extracting PDF text"));
    }

    #[test]
    fn test_docx_entities_are_decoded() {
        let xml = "<w:p><w:r><w:t>caf&#233; &#x2014; R&amp;D</w:t></w:r></w:p>";
        assert_eq!(docx_xml_to_text(xml).unwrap(), "café — R&D");
    }

    #[test]
    fn test_docx_attributed_breaks_separate_words() {
        let xml = r#"<w:p><w:r><w:t>Python</w:t><w:br w:type="textWrapping"/><w:t>Docker</w:t><w:br w:type="page"/><w:t>Kubernetes</w:t><w:tab w:val="left"/><w:t>AWS</w:t></w:r></w:p>"#;
        assert_eq!(
            docx_xml_to_text(xml).unwrap(),
            "Python\nDocker\nKubernetes\tAWS"
        );
    }

    #[test]
    fn test_docx_tab_stops_in_paragraph_properties_emit_nothing() {
        let xml = r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>SQL</w:t></w:r></w:p><w:p/><w:p><w:r><w:t>React</w:t></w:r></w:p>"#;
        assert_eq!(docx_xml_to_text(xml).unwrap(), "SQL\n\nReact");
    }

    #[test]
    fn test_malformed_docx_xml_fails() {
        assert!(matches!(
            docx_xml_to_text("<w:p><w:r><w:t>Python</w:r></w:p>"),
            Err(ExtractionError::Docx(_))
        ));
    }
}
