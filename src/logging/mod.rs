use anyhow::Result;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Layer,
};

/// Setup del logging a stderr
/// stdout queda reservado para el reporte `[OK]` / `[ERROR]`
pub fn setup_logging() -> Result<()> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_filter(get_console_filter());

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()?;

    tracing::debug!("📋 Logging configurado: {}", get_console_level());
    Ok(())
}

/// Filtro para console según environment (RUST_LOG tiene prioridad)
fn get_console_filter() -> EnvFilter {
    // En development: debug, en production: solo warnings y errores
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    };

    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn get_console_level() -> &'static str {
    if cfg!(debug_assertions) {
        "DEBUG (development build)"
    } else {
        "WARN (release build)"
    }
}
