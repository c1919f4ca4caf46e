use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use viewharvest::api::create_router;
use viewharvest::config::CONFIG;
use viewharvest::pipeline::Pipeline;
use viewharvest::query::SearchForm;
use viewharvest::shell::{self, Download};

#[derive(Parser)]
#[command(name = "viewharvest", about = "Scrape Naver view search results into spreadsheets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search each keyword and save one spreadsheet per keyword.
    /// Prompts for every field when no keywords are given.
    Search {
        /// Comma separated keywords
        keywords: Option<String>,
        #[arg(long, default_value = "")]
        page: String,
        #[arg(long, default_value = "")]
        count: String,
        /// YYYYMMDD
        #[arg(long, default_value = "")]
        start_date: String,
        /// YYYYMMDD
        #[arg(long, default_value = "")]
        end_date: String,
        /// Directory the spreadsheets are written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Show the results without writing any files
        #[arg(long)]
        no_save: bool,
    },
    /// Serve the search form over HTTP.
    Serve {
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the report on stdout stays readable
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let pipeline = Pipeline::new(CONFIG.search_url.clone());

    match cli.command {
        Command::Search {
            keywords,
            page,
            count,
            start_date,
            end_date,
            out_dir,
            no_save,
        } => {
            let form = match keywords {
                Some(keywords) => SearchForm {
                    keywords,
                    page,
                    count,
                    start_date,
                    end_date,
                },
                None => shell::prompt_form(&mut io::stdin().lock(), &mut io::stdout())?,
            };
            let out_dir = (!no_save).then_some(out_dir);

            let mut stdout = io::stdout();
            for outcome in pipeline.run_all(&form).await {
                let download = match &outcome.result {
                    Ok(report) => shell::save_download(report, out_dir.as_deref()).await,
                    Err(_) => Download::Skipped,
                };
                shell::render_outcome(&mut stdout, &outcome, &download)?;
            }
            stdout.flush()?;
        }
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| CONFIG.bind_addr.clone());
            let app = create_router(Arc::new(pipeline), &CONFIG.static_dir);
            let listener = tokio::net::TcpListener::bind(&bind)
                .await
                .with_context(|| format!("failed to bind {bind}"))?;
            tracing::info!("serving search form on http://{bind}");
            axum::serve(listener, app).await?;
        }
    }
    Ok(())
}
