use service_probes::{
    errors::constants::{DEFAULT_CONFIG_PATH, DEFAULT_PROMPT},
    trace, Config, InferenceProbe,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load(DEFAULT_CONFIG_PATH)?;
    trace::init_tracing_subscriber(&config.log_level);
    info!(
        base_url = %config.inference.base_url,
        model = %config.inference.model,
        "Configuration loaded"
    );

    let probe = InferenceProbe::new(&config.inference)?;

    // Failures are printed by the probe itself; the exit code stays zero.
    probe
        .query(DEFAULT_PROMPT, &mut std::io::stdout().lock())
        .await?;

    Ok(())
}
