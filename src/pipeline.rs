use std::path::PathBuf;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::config::Settings;
use crate::diff;
use crate::export;
use crate::model::{OutputRow, SourceResult, CSV_HEADER};
use crate::net;
use crate::parser::extract::summarize;
use crate::report;
use crate::sources::{self, PlatformSource};

/// What a run produced.
#[derive(Debug)]
pub struct RunReport {
    pub rows: Vec<OutputRow>,
    pub output_path: PathBuf,
    pub highlighted_path: Option<PathBuf>,
    pub changed_cells: usize,
}

/// Fetch every source in turn, build the table, diff it against the previous
/// output and write both files. Nothing is written if any fetch fails.
pub async fn run(settings: &Settings) -> Result<RunReport> {
    let client = net::build_client(settings)?;
    let sources = sources::default_sources(settings);
    let results = collect_results(&client, &sources).await?;

    let rows = report::build_rows(&results);
    let cells: Vec<Vec<String>> = rows.iter().map(OutputRow::to_cells).collect();

    // read the previous output before it is overwritten
    let prior = if settings.highlight {
        match export::read_rows(&settings.output_path) {
            Ok(prior) => prior,
            Err(e) => {
                warn!("Ignoring unreadable previous output: {:#}", e);
                None
            }
        }
    } else {
        None
    };

    export::write_rows(&settings.output_path, &CSV_HEADER, &cells)?;

    let mut highlighted_path = None;
    let mut changed_cells = 0;
    if settings.highlight {
        let marked = diff::diff_rows(&cells, prior.as_deref());
        changed_cells = diff::count_changes(&marked);
        info!("{} cells changed since last run", changed_cells);
        export::write_rows(&settings.highlighted_path, &CSV_HEADER, &marked)?;
        highlighted_path = Some(settings.highlighted_path.clone());
    }

    Ok(RunReport {
        rows,
        output_path: settings.output_path.clone(),
        highlighted_path,
        changed_cells,
    })
}

/// Sequential fetch; one summary per platform each source covers.
pub async fn collect_results(
    client: &reqwest::Client,
    sources: &[Box<dyn PlatformSource>],
) -> Result<Vec<SourceResult>> {
    let pb = ProgressBar::new(sources.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let mut results = Vec::new();
    for source in sources {
        pb.set_message(source.name());
        let records = match sources::fetch_records(client, &**source).await {
            Ok(records) => records,
            Err(e) => {
                pb.abandon();
                return Err(e.into());
            }
        };

        for &platform in source.platforms() {
            let own: Vec<_> = records
                .iter()
                .filter(|r| r.platform == platform)
                .cloned()
                .collect();
            let summary = summarize(&own);
            info!(
                "{}: current {:?}, upcoming {:?}",
                platform, summary.current_version, summary.upcoming_version
            );
            results.push(SourceResult {
                platform,
                summary,
                notes_url: source.notes_url().to_string(),
            });
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(results)
}
