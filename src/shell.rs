use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::data_models::{KeywordOutcome, KeywordReport};
use crate::exporter::HEADERS;
use crate::query::{DEFAULT_PAGE_OFFSET, DEFAULT_RESULT_LIMIT, SearchForm};

const SEPARATOR: &str = "---";

/// What happened to a report's spreadsheet in the terminal shell.
#[derive(Debug)]
pub enum Download {
    Saved(PathBuf),
    Failed(String),
    Skipped,
}

/// Asks for each form field on `out`, reading one line per field from `input`.
pub fn prompt_form<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<SearchForm> {
    Ok(SearchForm {
        keywords: prompt(input, out, "Keywords (comma separated)")?,
        page: prompt(
            input,
            out,
            &format!("Page offset (default {DEFAULT_PAGE_OFFSET})"),
        )?,
        count: prompt(
            input,
            out,
            &format!("Number of views (up to {DEFAULT_RESULT_LIMIT}, default {DEFAULT_RESULT_LIMIT})"),
        )?,
        start_date: prompt(input, out, "Start date (YYYYMMDD, optional)")?,
        end_date: prompt(input, out, "End date (YYYYMMDD, optional)")?,
    })
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<String> {
    write!(out, "{label}: ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Saves the report's spreadsheet into `out_dir`, if there is one.
pub async fn save_download(report: &KeywordReport, out_dir: Option<&Path>) -> Download {
    let Some(dir) = out_dir else {
        return Download::Skipped;
    };
    match report.export.write_to(dir).await {
        Ok(path) => Download::Saved(path),
        Err(e) => {
            log::error!("error saving {}, error: {:#}", report.export.file_name, e);
            Download::Failed(e.to_string())
        }
    }
}

/// Renders one keyword's section: header, then either the report or the
/// message that replaced it.
pub fn render_outcome<W: Write>(
    out: &mut W,
    outcome: &KeywordOutcome,
    download: &Download,
) -> io::Result<()> {
    writeln!(out, "Results for '{}'", outcome.keyword)?;
    match &outcome.result {
        Ok(report) => render_report(out, report, download)?,
        Err(e) => writeln!(out, "{e}")?,
    }
    writeln!(out, "{SEPARATOR}")
}

fn render_report<W: Write>(out: &mut W, report: &KeywordReport, download: &Download) -> io::Result<()> {
    writeln!(
        out,
        "Most frequent keyword: {} ({})",
        report.top_keyword.token, report.top_keyword.count
    )?;
    writeln!(out, "{:>4} | {} | {}", HEADERS[0], HEADERS[1], HEADERS[2])?;
    for row in &report.rows {
        writeln!(out, "{:>4} | {} | {}", row.index, row.title, row.link)?;
    }
    match download {
        Download::Saved(path) => writeln!(out, "Download saved to {}", path.display()),
        Download::Failed(reason) => writeln!(out, "Download failed: {reason}"),
        Download::Skipped => writeln!(
            out,
            "Download ready: {} ({} bytes)",
            report.export.file_name,
            report.export.bytes.len()
        ),
    }
}
