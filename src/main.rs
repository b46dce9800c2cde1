//! spatial3d - runs the spinning-ring workload with the configured settings

use spatial3d::config::AppConfig;
use spatial3d::spin;

fn main() {
    // Load configuration before logging so the configured level applies
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG overrides the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting spatial3d");

    match spin::run(&config.spin) {
        Ok(report) => {
            log::info!(
                "Rotated {} vertices over {} frames; final rotation {}",
                report.vertices,
                report.frames,
                report.final_rotation
            );
        }
        Err(e) => {
            log::error!("Spin workload failed: {}", e);
            std::process::exit(1);
        }
    }
}
