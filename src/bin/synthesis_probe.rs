use service_probes::{errors::constants::DEFAULT_CONFIG_PATH, trace, Config, SynthesisProbe};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load(DEFAULT_CONFIG_PATH)?;
    trace::init_tracing_subscriber(&config.log_level);
    info!(base_url = %config.synthesis.base_url, "Configuration loaded");

    let probe = SynthesisProbe::new(&config.synthesis)?;

    match probe.run().await {
        Ok(report) => {
            println!("{}", report);
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", SynthesisProbe::failure_message(err));
            std::process::exit(1);
        }
    }
}
