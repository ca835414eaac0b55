use clap::Parser;
use dotenvy::dotenv;
use file_intake::infrastructure::local_files;
use file_intake::{FileSelectionManager, IntakeConfig, UploadArea, UploadEvent};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Stage local files through the resume upload rules and print the selection
#[derive(Parser, Debug)]
#[command(name = "file-intake", version)]
struct Cli {
    /// Files to stage, in order
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Print the staged files as JSON
    #[arg(long)]
    json: bool,

    /// Also print why files were rejected or skipped
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "file_intake=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let area_config = IntakeConfig::from_env();
    let mut area = UploadArea::new(FileSelectionManager::new(area_config));

    let config = area.manager().config();
    info!(
        "Intake config: Max Size={}, Types={:?}, Extensions={:?}",
        file_intake::utils::format::format_size(config.max_file_size),
        config.allowed_mime_types,
        config.allowed_extensions
    );

    let candidates = local_files::stage_paths(&cli.paths);
    area.handle(UploadEvent::Drop(candidates));

    if cli.verbose {
        if let Some(report) = area.last_report() {
            for (file, rejection) in &report.rejected {
                println!("rejected  {}  [{}] {}", file.name, rejection.code(), rejection);
            }
            for file in &report.duplicates {
                println!("duplicate {}", file.name);
            }
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(area.manager().files())?);
        return Ok(());
    }

    let view = area.view();
    println!("{}", view.count_label);
    for entry in &view.entries {
        println!("{:>3}. {}  {}", entry.index + 1, entry.name, entry.size_label);
    }

    Ok(())
}
