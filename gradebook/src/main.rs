//! Gradebook demo
//!
//! Builds the sample roster, records its grades and prints summaries,
//! comparisons and course rollups as text or JSON.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gradebook::demo::{build_sample_roster, record_sample_grades, Report};
use gradebook::{Config, GradingService, OutputFormat};

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        min_grade = config.scale.min(),
        max_grade = config.scale.max(),
        "Starting gradebook demo"
    );

    let service = GradingService::from_config(&config);
    let (mut roster, ids) = build_sample_roster();
    record_sample_grades(&mut roster, &service, &ids)?;
    tracing::info!(events = roster.events().len(), "Sample grades recorded");

    let report = Report::build(&roster, &ids)?;
    match config.output {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
