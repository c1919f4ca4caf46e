use serde::Serialize;

use crate::data_models::{KeywordOutcome, ResultRow};

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub sections: Vec<KeywordSection>,
    pub processing_time_ms: u128,
}

/// One keyword's part of the response, in submission order.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum KeywordSection {
    Ok {
        keyword: String,
        top_keyword: String,
        top_count: usize,
        rows: Vec<ResultRow>,
        download: Download,
    },
    Error {
        keyword: String,
        message: String,
    },
}

#[derive(Debug, Serialize)]
pub struct Download {
    pub file_name: String,
    pub mime_type: String,
    pub data_uri: String,
}

impl From<KeywordOutcome> for KeywordSection {
    fn from(outcome: KeywordOutcome) -> Self {
        match outcome.result {
            Ok(report) => KeywordSection::Ok {
                keyword: outcome.keyword,
                top_keyword: report.top_keyword.token,
                top_count: report.top_keyword.count,
                download: Download {
                    file_name: report.export.file_name.clone(),
                    mime_type: report.export.mime_type().to_string(),
                    data_uri: report.export.data_uri(),
                },
                rows: report.rows,
            },
            Err(e) => KeywordSection::Error {
                keyword: outcome.keyword,
                message: e.to_string(),
            },
        }
    }
}
