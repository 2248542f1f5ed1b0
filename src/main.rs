use std::sync::Arc;

use env_logger::Env;
use log::info;

use photolysis::config::Config;
use photolysis::date_gen::DateTimeGenerator;
use photolysis::{PhotolysisContext, RateSetEvaluator, SpectralDataStore, cos_zenith};

const DEFAULT_CONFIG: &str = "./data/config/single_column.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    info!("Reading configuration from {}", config_path);
    let config = Config::from_file(&config_path)?;

    let context = match config.spectra_file() {
        Some(path) => {
            let mut spectra = SpectralDataStore::builtin()?;
            let added = spectra.extend_from_file(path)?;
            info!("Added {} species from {}", added, path.display());
            let shared = PhotolysisContext::shared()?;
            Arc::new(PhotolysisContext::new(shared.flux_table().clone(), spectra))
        }
        None => PhotolysisContext::shared()?,
    };

    let evaluator = RateSetEvaluator::new(context, config.mechanism())?;
    let location = config.location();
    let atmosphere = config.atmosphere();

    let generator = DateTimeGenerator::new(config.clone());
    let datetimes = generator.generate_datetime_series();
    let timestamps = generator.generate_timestamps();

    let mut rates = evaluator.new_rate_set();
    for (datetime, &time) in datetimes.iter().zip(&timestamps) {
        evaluator.evaluate_into(time, location, atmosphere, &mut rates);
        let mu = cos_zenith(time, location.latitude(), location.longitude());

        println!("{} UTC  cos(SZA) = {:.4}", datetime, mu);
        for (name, value) in rates.iter() {
            println!("  {:<12} {:.4e} s-1", name, value);
        }
    }

    info!(
        "Evaluated {} rates at {} time steps",
        evaluator.rate_names().len(),
        timestamps.len()
    );

    Ok(())
}
