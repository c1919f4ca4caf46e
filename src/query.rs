use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const DEFAULT_SEARCH_URL: &str = "https://search.naver.com/search.naver";
pub const DEFAULT_PAGE_OFFSET: u64 = 1;
pub const DEFAULT_RESULT_LIMIT: usize = 30;

const DATE_FORMAT: &str = "%Y%m%d";

/// Raw form fields exactly as the user typed them. Every field may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    /// Comma separated keyword list.
    pub keywords: String,
    pub page: String,
    pub count: String,
    pub start_date: String,
    pub end_date: String,
}

impl SearchForm {
    /// Splits the keyword list on commas. An empty form still yields one
    /// (empty) keyword so the user is told what is missing.
    pub fn keywords(&self) -> Vec<String> {
        self.keywords
            .split(',')
            .map(|k| k.trim().to_string())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub keyword: String,
    pub page_offset: u64,
    pub result_limit: usize,
    pub date_range: Option<DateRange>,
}

impl SearchRequest {
    /// Parses one keyword plus the shared form fields into a typed request.
    /// Numbers and dates are checked before the keyword.
    pub fn parse(keyword: &str, form: &SearchForm) -> Result<SearchRequest, ValidationError> {
        let page_offset = parse_positive(&form.page, "page offset", DEFAULT_PAGE_OFFSET)?;
        let result_limit = parse_positive(&form.count, "result count", DEFAULT_RESULT_LIMIT)?;
        let start = parse_date(&form.start_date, "start date")?;
        let end = parse_date(&form.end_date, "end date")?;

        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(ValidationError::EmptyKeyword);
        }

        let date_range = match (start, end) {
            (Some(start), Some(end)) => Some(DateRange { start, end }),
            _ => None,
        };

        Ok(SearchRequest {
            keyword: keyword.to_string(),
            page_offset,
            result_limit,
            date_range,
        })
    }

    /// Builds the "view" vertical search URL. The keyword is appended as is.
    pub fn url(&self, search_url: &str) -> String {
        let mut url = format!(
            "{search_url}?where=view&sm=tab_jum&query={}&start={}",
            self.keyword, self.page_offset
        );
        if let Some(range) = &self.date_range {
            url.push_str(&format!(
                "&nso=p%3Afrom{}to{}",
                range.start.format(DATE_FORMAT),
                range.end.format(DATE_FORMAT)
            ));
        }
        url
    }
}

fn parse_positive<T>(raw: &str, field: &'static str, default: T) -> Result<T, ValidationError>
where
    T: std::str::FromStr + PartialOrd + From<u8>,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    match raw.parse::<T>() {
        Ok(n) if n >= T::from(1) => Ok(n),
        _ => Err(ValidationError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}

fn parse_date(raw: &str, field: &'static str) -> Result<Option<NaiveDate>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate {
            field,
            value: raw.to_string(),
        })
}
