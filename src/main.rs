use anyhow::Result;
use classifier_rs::api::{ApiServer, AppState};
use classifier_rs::config::Config;
use classifier_rs::dataset::load_csv_path;
use classifier_rs::model::{self, TrainingOptions};
use classifier_rs::notify::{ResultSender, SmtpSender};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = if std::path::Path::new("config.toml").exists() {
        Config::from_file("config.toml")?
    } else {
        Config::default()
    };

    // Initialize logging
    let level = Level::from_str(&config.logging.level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Starting classifier-rs");
    info!("  Listening on: {}", config.server.listen_addr);
    info!("  Split ratio: {}", config.training.split_ratio);
    info!("  Seed: {}", config.training.seed);

    let options = TrainingOptions {
        split_ratio: config.training.split_ratio,
        seed: config.training.seed,
    };

    let sender: Option<Arc<dyn ResultSender>> = if config.notify.enabled {
        info!("  Notifications via {}", config.notify.smtp_host);
        Some(Arc::new(SmtpSender::new(&config.notify)?))
    } else {
        None
    };

    // Build the shared state handle once, up front
    let state = Arc::new(AppState::new(
        config.dataset.missing_field_policy,
        options,
        sender,
    ));

    // Optionally train on a dataset at startup
    if let Some(path) = &config.dataset.path {
        info!("Training on startup dataset: {}", path);
        let records = load_csv_path(path, config.dataset.missing_field_policy)?;
        let (model, report) = model::train(&records, options)?;

        match report.accuracy {
            Some(accuracy) => info!("Held-out accuracy: {:.4}", accuracy),
            None => info!("No held-out split; accuracy not reported"),
        }

        *state.predictions.write().await = model.predict_records(&records);
        *state.model.write().await = Some(model);
    }

    let server = ApiServer::new(Arc::clone(&state), config.server.listen_addr.clone());
    server.run().await?;

    Ok(())
}
