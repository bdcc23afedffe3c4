//! Swapro Intake developer console runtime.

#![forbid(unsafe_code)]

use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use swapro_application::{EntryService, SchemaService, SettingsService, StatisticsService};
use swapro_core::{AppError, AppResult};
use swapro_infrastructure::JsonFileStorage;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct ConsoleConfig {
    data_dir: PathBuf,
    stats_poll_interval_ms: u64,
    seed_samples: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ConsoleConfig::load()?;
    let storage = Arc::new(JsonFileStorage::new(config.data_dir.clone()));
    let schema_service = SchemaService::new(storage.clone());
    let statistics_service = StatisticsService::new(storage.clone());
    let entry_service = EntryService::new(storage.clone());
    let settings_service = SettingsService::new(storage);

    info!(
        data_dir = %config.data_dir.display(),
        stats_poll_interval_ms = config.stats_poll_interval_ms,
        seed_samples = config.seed_samples,
        "swapro-console started"
    );

    let form_config = schema_service.load_config().await?;
    info!(
        steps = form_config.steps().len(),
        fields = form_config.field_count(),
        clients = form_config.clients().len(),
        active_clients = form_config.active_clients().len(),
        locations = form_config.locations().len(),
        positions = form_config.position_placements().len(),
        "form configuration loaded"
    );

    let settings = settings_service.load_settings().await?;
    info!(
        skip_splash_screen = settings.skip_splash_screen,
        skip_loading_screen = settings.skip_loading_screen,
        show_debug_info = settings.show_debug_info,
        auto_fill_enabled = settings.auto_fill_enabled,
        "developer settings loaded"
    );

    if config.seed_samples {
        let entries = entry_service.list_entries().await?;
        if entries.is_empty() {
            let seeded = entry_service.generate_samples().await?;
            info!(count = seeded.len(), "seeded sample dev entries");
        } else {
            info!(count = entries.len(), "dev entries already present, not seeding");
        }
    }

    loop {
        match statistics_service.summary().await {
            Ok(summary) => {
                let top_position = summary
                    .top_positions
                    .first()
                    .map(|(position, count)| format!("{position} ({count})"))
                    .unwrap_or_else(|| "n/a".to_owned());
                info!(
                    total_submissions = summary.total_submissions,
                    recent = summary.recent_submissions.len(),
                    top_position = %top_position,
                    "submission statistics"
                );
            }
            Err(error) => {
                warn!(error = %error, "failed to refresh submission statistics");
            }
        }

        tokio::time::sleep(Duration::from_millis(config.stats_poll_interval_ms)).await;
    }
}

impl ConsoleConfig {
    fn load() -> AppResult<Self> {
        let data_dir = env::var("SWAPRO_DATA_DIR")
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data"));
        let stats_poll_interval_ms = parse_env_u64("SWAPRO_STATS_POLL_INTERVAL_MS", 30_000)?;
        let seed_samples = parse_env_bool("SWAPRO_SEED_SAMPLES", false)?;

        if stats_poll_interval_ms == 0 {
            return Err(AppError::Validation(
                "SWAPRO_STATS_POLL_INTERVAL_MS must be greater than zero".to_owned(),
            ));
        }

        Ok(Self {
            data_dir,
            stats_poll_interval_ms,
            seed_samples,
        })
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn parse_env_u64(name: &str, default: u64) -> AppResult<u64> {
    match env::var(name) {
        Ok(value) => value.parse::<u64>().map_err(|error| {
            AppError::Validation(format!("invalid {name} value '{value}': {error}"))
        }),
        Err(_) => Ok(default),
    }
}

fn parse_env_bool(name: &str, default: bool) -> AppResult<bool> {
    match env::var(name) {
        Ok(value) => value.parse::<bool>().map_err(|error| {
            AppError::Validation(format!("invalid {name} value '{value}': {error}"))
        }),
        Err(_) => Ok(default),
    }
}
