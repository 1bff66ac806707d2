use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lockstep_vec2::config::{HarnessConfig, DEFAULT_CONFIG_PATH};
use lockstep_vec2::replay::{ReplayError, Scenario};

fn setup_file_logging(config: &HarnessConfig) -> std::io::Result<String> {
    let log_dir = &config.log_dir;
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)?;
    }

    // Clean up old log files, keeping only the most recent ones
    cleanup_old_logs(log_dir, config.log_keep_count);

    let now = chrono::Local::now();
    let log_filename = format!("lockstep_vec2_{}.log", now.format("%Y%m%d_%H%M%S"));
    let log_path_str = log_dir.join(&log_filename).to_string_lossy().to_string();

    let file_appender = RollingFileAppender::new(Rotation::NEVER, log_dir, &log_filename);

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(log_path_str)
}

fn cleanup_old_logs(log_dir: &Path, keep_count: usize) {
    if let Ok(entries) = fs::read_dir(log_dir) {
        let mut log_files: Vec<_> = entries
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map(|s| s.starts_with("lockstep_vec2") && s.ends_with(".log"))
                    .unwrap_or(false)
            })
            .collect();

        // Oldest first
        log_files.sort_by_key(|e| e.metadata().ok().and_then(|m| m.modified().ok()));

        if log_files.len() > keep_count {
            for file in log_files.iter().take(log_files.len() - keep_count) {
                let _ = fs::remove_file(file.path());
            }
        }
    }
}

fn run(config: &HarnessConfig) -> Result<bool, ReplayError> {
    let scenario = match &config.scenario_path {
        Some(path) => Scenario::load(path)?,
        None => {
            info!(
                "Generating random scenario (seed {:#x}, {} steps)",
                config.random_seed, config.random_steps
            );
            let scenario = Scenario::random(config.random_seed, config.random_steps);
            if let Some(path) = &config.save_generated_to {
                scenario.save(path)?;
            }
            scenario
        }
    };

    let report = scenario.run()?;
    println!("{} {:#018x}", report.scenario, report.digest);

    match config.expected_digest {
        Some(expected) if !report.matches(expected) => {
            error!(
                "Desync: scenario '{}' produced {:#018x}, expected {:#018x}",
                report.scenario, report.digest, expected
            );
            Ok(false)
        }
        Some(_) => {
            info!("Digest matches expected value");
            Ok(true)
        }
        None => {
            warn!("No expected digest configured; share {:#018x} with peers to compare", report.digest);
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    // Logging is configured from the file, so load errors are reported once it is up.
    let (config, load_error) = match HarnessConfig::load(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (HarnessConfig::default(), Some(e)),
    };

    match setup_file_logging(&config) {
        Ok(log_file) => info!("Logging to {}", log_file),
        Err(e) => {
            eprintln!("Failed to set up logging in {}: {}", config.log_dir.display(), e);
            return ExitCode::from(2);
        }
    }

    match load_error {
        None => info!("Loaded harness config from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load harness config: {}", e);
            error!("Using default HarnessConfig");
        }
    }

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("Replay failed: {}", e);
            ExitCode::from(2)
        }
    }
}
