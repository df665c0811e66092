//! Document loading for the indexer.
//!
//! Reads the source document from disk and returns plain UTF-8 text.
//! PDF content (detected by the `%PDF` magic) goes through `pdf_extract`;
//! anything else must already be valid UTF-8 text. Both a missing file and
//! unparsable content surface as [`Error::DocumentLoad`].

use std::path::Path;

use crate::{Error, Result};

pub fn load_document(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| Error::DocumentLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    if bytes.starts_with(b"%PDF") {
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| Error::DocumentLoad {
            path: path.display().to_string(),
            reason: format!("PDF extraction failed: {}", e),
        })
    } else {
        String::from_utf8(bytes).map_err(|_| Error::DocumentLoad {
            path: path.display().to_string(),
            reason: "not a PDF and not valid UTF-8 text".to_string(),
        })
    }
}
