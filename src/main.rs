use anyhow::Result;
use chrono::Local;
use eventboard::{config::Config, render};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,eventboard=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) load config ──────────────────────────────────────────────
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = ?e, "invalid configuration");
            let fallback = Config::default();
            render::write_page(&fallback.output, &render::render_error_page(&fallback.title))?;
            return Err(e);
        }
    };
    let today = config.today.unwrap_or_else(|| Local::now().date_naive());
    info!(%today, source = %config.source, output = %config.output.display(), "building board");

    // ─── 3) fetch → parse → classify → render ────────────────────────
    eventboard::run(&config, today).await
}
