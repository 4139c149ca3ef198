//! claria-interpret
//!
//! Reads a scoring request as JSON from a file argument or stdin and writes the
//! interpreted result to stdout. `--list` prints the configured instruments.
//!
//! Environment:
//! - `CLARIA_CONFIG`: engine config JSON file
//! - `CLARIA_CATALOG`: JSON array of additional instrument definitions
//! - `CLARIA_UNKNOWN_INSTRUMENT`: `fallback` or `reject`, overrides the config file
//! - `CLARIA_LOG_FORMAT`: `json` for structured logs on stderr

use std::env;
use std::io::Read;

use claria_core::models::ScoringRequest;
use claria_instruments::config::{EngineConfig, UnknownInstrumentPolicy};
use claria_instruments::{Engine, ThresholdCatalog};
use eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let config = load_config()?;
    let catalog = load_catalog()?;
    let engine = Engine::new(&catalog, config);

    let arg = env::args().nth(1);
    if arg.as_deref() == Some("--list") {
        for instrument in catalog.instruments() {
            println!("{}\t{}", instrument.id, instrument.display_name);
        }
        return Ok(());
    }

    let input = read_input(arg.as_deref())?;
    let request: ScoringRequest =
        serde_json::from_str(&input).wrap_err("scoring request is not valid JSON")?;

    tracing::info!(instrument_id = %request.instrument_id, "interpreting scores");
    let result = engine.interpret(&request)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if env::var("CLARIA_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config() -> Result<EngineConfig> {
    let mut config = match env::var("CLARIA_CONFIG") {
        Ok(path) => {
            let contents = std::fs::read_to_string(&path)
                .wrap_err_with(|| format!("failed to read config at {path}"))?;
            EngineConfig::from_json(&contents)?
        }
        Err(_) => EngineConfig::default(),
    };

    if let Ok(policy) = env::var("CLARIA_UNKNOWN_INSTRUMENT") {
        let policy: UnknownInstrumentPolicy = policy.parse()?;
        config = config.with_unknown_instrument(policy);
    }
    Ok(config)
}

fn load_catalog() -> Result<ThresholdCatalog> {
    let mut catalog = ThresholdCatalog::builtin().clone();
    if let Ok(path) = env::var("CLARIA_CATALOG") {
        let contents = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read catalog at {path}"))?;
        catalog
            .extend_from_json(&contents)
            .wrap_err_with(|| format!("invalid catalog at {path}"))?;
        tracing::info!(path = %path, instruments = catalog.len(), "loaded instrument catalog");
    }
    Ok(catalog)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) if path != "-" => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read scoring request at {path}")),
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .wrap_err("failed to read scoring request from stdin")?;
            Ok(input)
        }
    }
}
