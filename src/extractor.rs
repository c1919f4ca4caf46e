use anyhow::{Result, anyhow};
use scraper::{Html, Selector};

use crate::data_models::ResultRow;

/// Title anchors of the "view" vertical's result list.
pub const RESULT_SELECTOR: &str = ".title_link._cross_trigger";

pub struct Extractor {
    selector: Selector,
}

impl Extractor {
    pub fn new() -> Extractor {
        Extractor {
            selector: Selector::parse(RESULT_SELECTOR).expect("built-in result selector is valid"),
        }
    }

    /// Uses a different CSS selector for the title anchors.
    pub fn with_selector(css: &str) -> Result<Extractor> {
        let selector =
            Selector::parse(css).map_err(|e| anyhow!("invalid result selector {css:?}: {e}"))?;
        Ok(Extractor { selector })
    }

    /// Returns at most `limit` rows in document order, indexed from 1.
    /// An empty vector means the page had no result items.
    pub fn extract(&self, html: &str, limit: usize) -> Vec<ResultRow> {
        let document = Html::parse_document(html);
        document
            .select(&self.selector)
            .take(limit)
            .enumerate()
            .map(|(i, element)| {
                let title = element.text().collect::<String>().trim().to_string();
                let link = element.value().attr("href").map(|h| h.to_string());
                ResultRow::new(i + 1, title, link)
            })
            .collect()
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_selector() {
        let extractor = Extractor::with_selector("a.hit").unwrap();
        let rows = extractor.extract(r#"<a class="hit" href="/1">one</a><a href="/2">two</a>"#, 10);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "one");
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        assert!(Extractor::with_selector("a[").is_err());
    }
}
