use color_eyre::eyre::Result;
use reqwest::Client as HttpClient;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use uvs::{
    CallerGate, HomeserverResolver, Settings, SynapseClient, VerificationService,
    WellKnownDiscovery,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let settings = Settings::load()?;
    init_tracing(&settings.log_level)?;

    let mode = settings.homeserver_mode()?;
    tracing::info!(mode = ?mode, "Loaded configuration");

    let http_client = HttpClient::builder()
        .timeout(settings.request_timeout())
        .build()?;

    let discovery_client = WellKnownDiscovery::http_client_builder()
        .timeout(settings.request_timeout())
        .build()?;

    let provider = SynapseClient::new(http_client, settings.access_token.clone());
    let discovery = WellKnownDiscovery::new(discovery_client, settings.disable_ip_blacklist);
    let gate = CallerGate::new(settings.caller_secret());
    if !gate.is_enabled() {
        tracing::warn!("UVS_AUTH_TOKEN is not set, every caller is admitted");
    }

    let service = VerificationService::new(gate, HomeserverResolver::new(mode, discovery), provider);

    let listener = tokio::net::TcpListener::bind(settings.bind_address()).await?;
    service.run_standalone(listener).await?;

    Ok(())
}

/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(default_level: &str) -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
