use crate::analyzer::KeywordAnalyzer;
use crate::data_models::{KeywordOutcome, KeywordReport};
use crate::error::PipelineError;
use crate::exporter;
use crate::extractor::Extractor;
use crate::fetcher::Fetcher;
use crate::query::{SearchForm, SearchRequest};

/// query -> fetch -> extract -> analyze -> export, one keyword at a time.
pub struct Pipeline {
    search_url: String,
    fetcher: Fetcher,
    extractor: Extractor,
    analyzer: KeywordAnalyzer,
}

impl Pipeline {
    pub fn new(search_url: impl Into<String>) -> Pipeline {
        Pipeline::with_parts(search_url, Extractor::new(), KeywordAnalyzer::default())
    }

    pub fn with_parts(
        search_url: impl Into<String>,
        extractor: Extractor,
        analyzer: KeywordAnalyzer,
    ) -> Pipeline {
        Pipeline {
            search_url: search_url.into(),
            fetcher: Fetcher::new(),
            extractor,
            analyzer,
        }
    }

    /// Runs the whole cycle for one keyword. Validation happens before any
    /// request is sent.
    pub async fn run(&self, keyword: &str, form: &SearchForm) -> Result<KeywordReport, PipelineError> {
        let request = SearchRequest::parse(keyword, form)?;
        let url = request.url(&self.search_url);

        let html = self.fetcher.fetch_page(&url).await?;
        let rows = self.extractor.extract(&html, request.result_limit);
        if rows.is_empty() {
            return Err(PipelineError::NoResults {
                page: request.page_offset,
            });
        }
        log::debug!("extracted {} rows for {:?}", rows.len(), request.keyword);

        let top_keyword = self.analyzer.top_for_rows(&rows)?;
        let export = exporter::export(&request.keyword, &rows)?;

        Ok(KeywordReport {
            keyword: request.keyword,
            top_keyword,
            rows,
            export,
        })
    }

    /// Runs every keyword in the form, in order. A failed keyword is recorded
    /// and the loop moves on.
    pub async fn run_all(&self, form: &SearchForm) -> Vec<KeywordOutcome> {
        let mut outcomes = Vec::new();
        for keyword in form.keywords() {
            log::info!("searching views for {keyword:?}");
            let result = self.run(&keyword, form).await;
            match &result {
                Ok(report) => log::info!(
                    "{keyword:?}: {} rows, top keyword {:?}",
                    report.rows.len(),
                    report.top_keyword.token
                ),
                Err(e) if e.is_informational() => log::info!("{keyword:?}: {e}"),
                Err(e) => log::warn!("{keyword:?} failed, error: {:#}", e),
            }
            outcomes.push(KeywordOutcome { keyword, result });
        }
        outcomes
    }
}
