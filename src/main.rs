use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use masjid_quiz::Theme;
use masjid_quiz::core::config::{self, CliOverrides, QuizConfig};
use masjid_quiz::source;
use masjid_quiz::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "masjid-quiz", about = "Adaptive lecture quiz for the masjid portal")]
struct Args {
    /// Lecture (kajian) whose exam questions to drill
    #[arg(short, long)]
    lecture: String,

    /// Masjid slug, used for the results page route
    #[arg(short, long)]
    slug: Option<String>,

    /// Portal API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Colour scheme
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,

    /// Read questions from a saved JSON response instead of the API
    #[arg(long)]
    questions_file: Option<PathBuf>,

    /// Print the completion report as JSON after the session ends
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to masjid-quiz.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("masjid-quiz.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    info!("masjid-quiz starting up for lecture {}", args.lecture);

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}, falling back to defaults", e);
        QuizConfig::default()
    });
    let overrides = CliOverrides {
        lecture_id: args.lecture,
        slug: args.slug,
        base_url: args.base_url,
        theme: args.theme,
        questions_file: args.questions_file,
    };
    let resolved = config::resolve(&file_config, &overrides);
    info!(
        "Resolved config: base_url={}, theme={:?}, file={:?}",
        resolved.api_base_url, resolved.theme, resolved.questions_file
    );

    let question_source = source::build_source(&resolved).map_err(std::io::Error::other)?;
    let report = tui::run(resolved, question_source)?;

    if args.json
        && let Some(report) = report
    {
        let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
        println!("{json}");
    }
    Ok(())
}
