use clap::Parser;
use futures::future::join_all;
use seo_sniper::config::{load_config_or_default, AppConfig};
use seo_sniper::model::{AnalysisResponse, FetchError};
use seo_sniper::storage::SqliteStorage;
use seo_sniper::{Assistant, HttpFetcher, PageAnalyzer};
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Analyze web pages for on-page SEO signals and print one JSON report per URL.
#[derive(Parser, Debug)]
#[command(name = "seo-sniper")]
#[command(version, about = "On-page SEO analyzer")]
struct CliArgs {
    /// Path to the JSON config file; a missing file means defaults
    #[arg(long, default_value = "config.json")]
    config: String,

    /// URLs to analyze; falls back to `urls` from the config file
    urls: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging; stdout is reserved for the JSON reports
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    // Exits with usage on bad arguments
    let cli = CliArgs::parse();

    // Load configuration from file
    let config: AppConfig = match load_config_or_default(&cli.config) {
        Ok(cfg) => cfg.apply_env(),
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let urls = if cli.urls.is_empty() {
        config.urls.clone()
    } else {
        cli.urls
    };
    if urls.is_empty() {
        error!("No URLs to analyze. Pass them as arguments or list them under `urls` in {}", cli.config);
        return ExitCode::from(2);
    }

    let fetcher = match HttpFetcher::from_config(&config) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let analyzer = PageAnalyzer::new(fetcher);

    let assistant = Assistant::from_config(&config.gemini);
    if !assistant.is_available() {
        warn!("Gemini API not configured - AI suggestions will be limited");
    }

    let storage = match SqliteStorage::new(&config.database_path) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize storage: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Analyzing {} URL(s)...", urls.len());
    let tasks: Vec<_> = urls
        .iter()
        .map(|url| analyzer.analyze_with(url, &assistant))
        .collect();
    let results = join_all(tasks).await;

    let mut failures = 0;
    for (url, result) in urls.iter().zip(results) {
        match result {
            Ok(response) => report_success(&storage, &config.requester, &response),
            Err(e) => {
                failures += 1;
                report_failure(url, &e);
            }
        }
    }

    match storage.recent_history(&config.requester, config.history_limit) {
        Ok(history) => {
            info!("Recent analyses for {}:", config.requester);
            for entry in history {
                info!(
                    "  #{} {} | score {:.1} | {}",
                    entry.id,
                    entry.url,
                    entry.seo_score,
                    entry.created_at.format("%Y-%m-%d %H:%M:%S")
                );
            }
        }
        Err(e) => warn!("History lookup failed: {}", e),
    }

    if failures > 0 {
        warn!("{} of {} analyses failed", failures, urls.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Saves and prints one finished analysis. Storage problems do not discard the result.
fn report_success(storage: &SqliteStorage, requester: &str, response: &AnalysisResponse) {
    match storage.save_analysis(requester, &response.report) {
        Ok(id) => info!("Analysis of {} saved as #{}", response.report.url, id),
        Err(e) => warn!("DB save error for {}: {}", response.report.url, e),
    }

    match serde_json::to_string_pretty(response) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Cannot serialize analysis of {}: {}", response.report.url, e),
    }
}

fn report_failure(url: &str, e: &FetchError) {
    error!("Error analyzing {}: {}", url, e);
}
