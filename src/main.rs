use clap::Parser;
use small_fleet::utils::logger;
use small_fleet::{CliConfig, FleetError, FleetRunner, Scenario};

fn load_scenario(config: &CliConfig) -> Result<Scenario, FleetError> {
    match &config.scenario {
        Some(path) => {
            tracing::info!("Loading scenario from {}", path);
            Scenario::from_file(path)
        }
        None => {
            tracing::info!("No scenario given, running the built-in demo");
            Ok(Scenario::demo())
        }
    }
}

fn run(config: &CliConfig) -> Result<(), FleetError> {
    let scenario = load_scenario(config)?;
    let outcome = FleetRunner::run(&scenario)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&outcome.summary())?);
        return Ok(());
    }

    for error in &outcome.load_failures {
        println!("ERROR: {}", error);
    }
    for report in outcome.reports() {
        print!("{}", report);
    }
    for container in &outcome.ashore {
        println!("Ashore: {} (load: {})", container.serial(), container.load());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ Fleet run failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        return Err(anyhow::anyhow!("{}", e.user_friendly_message()));
    }

    Ok(())
}
