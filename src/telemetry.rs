use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Crates whose request-level chatter would drown out our own spans.
const QUIET_TARGETS: [&str; 3] = ["hyper=warn", "h2=warn", "rustls=warn"];

/// Filter used when `RUST_LOG` isn't set: `default_level` for everything, with the
/// HTTP transport crates held back to warnings.
fn default_filter(default_level: &str) -> EnvFilter {
    let mut directives = vec![default_level.to_string()];
    directives.extend(QUIET_TARGETS.iter().map(|d| d.to_string()));
    EnvFilter::new(directives.join(","))
}

/// Builds the bunyan JSON subscriber for the service.
///
/// `name` is attached to every record and `sink` receives the output; tests
/// hand in `std::io::sink` to swallow it.
pub fn get_subscriber<Sink>(
    name: String,
    default_level: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(&default_level));
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(name, sink))
}

/// Installs `subscriber` process-wide and routes `log` records (actix, reqwest)
/// into it. Only the first call can succeed.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> anyhow::Result<()> {
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}
