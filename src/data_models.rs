use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::error::{ExportError, PipelineError};

/// Stored in the link column when a result item has no usable `href`.
pub const MISSING_LINK: &str = "no link";

pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub index: usize,
    pub title: String,
    pub link: String,
}

impl ResultRow {
    pub fn new(index: usize, title: String, link: Option<String>) -> ResultRow {
        ResultRow {
            index,
            title,
            link: link
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| MISSING_LINK.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeywordFrequency {
    pub token: String,
    pub count: usize,
}

/// An in-memory spreadsheet offered once as a download.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn new(keyword: &str, bytes: Vec<u8>) -> ExportArtifact {
        ExportArtifact {
            file_name: format!("{keyword}_views_data.xlsx"),
            bytes,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        XLSX_MIME_TYPE
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", XLSX_MIME_TYPE, STANDARD.encode(&self.bytes))
    }

    /// Writes the artifact into `dir`. Path separators in the keyword-derived
    /// name are replaced so the file always lands directly inside `dir`.
    pub async fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let safe_name: String = self
            .file_name
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(safe_name);
        tokio::fs::write(&path, &self.bytes).await?;
        Ok(path)
    }
}

/// Successful output of one keyword's run.
#[derive(Debug, Clone)]
pub struct KeywordReport {
    pub keyword: String,
    pub top_keyword: KeywordFrequency,
    pub rows: Vec<ResultRow>,
    pub export: ExportArtifact,
}

/// One entry of a multi-keyword run, in submission order.
#[derive(Debug)]
pub struct KeywordOutcome {
    pub keyword: String,
    pub result: Result<KeywordReport, PipelineError>,
}
