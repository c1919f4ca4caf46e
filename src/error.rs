use thiserror::Error;

/// Raised while turning raw form fields into a typed search request.
/// Nothing that fails here ever reaches the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Enter a search keyword.")]
    EmptyKeyword,

    #[error("Enter a positive number for the {field} (got {value:?}).")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Enter the {field} as YYYYMMDD (got {value:?}).")]
    InvalidDate { field: &'static str, value: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("result titles contain no words to count")]
    NoTokens,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to build spreadsheet archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything that can end one keyword's run. The `Display` text is what the
/// shell shows the user in place of the result table.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No results on page {page}.")]
    NoResults { page: u64 },

    #[error("Failed to fetch search results: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Could not find a most frequent keyword: {0}")]
    Analyze(#[from] AnalyzeError),

    #[error("Could not build the download: {0}")]
    Export(#[from] ExportError),
}

impl PipelineError {
    /// Validation problems and empty pages are expected outcomes rather than failures.
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NoResults { .. })
    }
}
