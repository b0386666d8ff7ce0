use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use os_versions::Settings;

#[derive(Parser)]
#[command(
    name = "os_versions",
    about = "Current and upcoming OS releases (macOS, iPadOS, ChromeOS, Windows) to CSV"
)]
struct Cli {
    /// Output CSV (default: os_versions.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// CSV with changed cells flagged (default: highlighted_os_versions.csv)
    #[arg(long)]
    highlighted: Option<PathBuf>,
    /// Skip comparing against the previous output
    #[arg(long)]
    no_diff: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut settings = Settings::load()?;
    if let Some(output) = cli.output {
        settings.output_path = output;
    }
    if let Some(highlighted) = cli.highlighted {
        settings.highlighted_path = highlighted;
    }
    if cli.no_diff {
        settings.highlight = false;
    }

    let report = os_versions::run(&settings).await?;

    let today = chrono::Local::now().date_naive();
    println!(
        "[{}] OS version data written to {} ({} rows)",
        today,
        report.output_path.display(),
        report.rows.len()
    );
    if let Some(path) = &report.highlighted_path {
        println!(
            "[{}] {} changed cells flagged in {}",
            today,
            report.changed_cells,
            path.display()
        );
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
