use anyhow::bail;
use orbit_analytics::services::{
    export_to_file, AnalyticsSession, EnrichConfig, SessionState, DEFAULT_EXPORT_FILENAME,
};
use orbit_analytics::sources::InterviewApiClient;
use orbit_analytics::Config;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orbit_analytics=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!(
        "Loading analytics for the last {} days from {}",
        config.days, config.api_base
    );

    let client = InterviewApiClient::new(
        &config.api_base,
        config.auth_token.clone(),
        config.user_id.clone(),
    );

    let mut session = AnalyticsSession::new(config.days, EnrichConfig::default());
    // A fresh session is always Idle, so the initial load starts here.
    let Some(generation) = session.ensure_started() else {
        return Ok(());
    };

    let result = client.fetch_series(config.days).await;
    session.complete(generation, result);

    if let SessionState::Error(message) = session.state() {
        bail!("Error loading analytics: {message}");
    }

    if session.is_empty() {
        warn!("No interview data in the selected range");
        return Ok(());
    }

    if let Some(latest) = session.series().last() {
        let score = latest
            .point
            .overall
            .map(|v| v.to_string())
            .unwrap_or_else(|| "--".to_string());
        info!("Latest overall score: {} (EMA {})", score, latest.overall_ema);
    }
    info!("Trend: {} (slope {})", session.trend(), session.slope());
    for bucket in session.distribution() {
        info!("  {:>5}: {}", bucket.range, bucket.count);
    }

    let path = config
        .export_path
        .clone()
        .unwrap_or_else(|| DEFAULT_EXPORT_FILENAME.to_string());
    export_to_file(session.series(), &path)?;

    Ok(())
}
