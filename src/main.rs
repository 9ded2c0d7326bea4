//! Печатает минимум, максимум и среднее по курсам ЦБ за последние 90 дней.

use std::io;
use std::process::ExitCode;

use cbr_rates_report::{CbrClient, RateAggregator, RatesError, write_report};
use chrono::Local;
use log::{error, info};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), RatesError> {
    let client = CbrClient::new()?;
    let today = Local::now().date_naive();
    let aggregator = RateAggregator::collect(&client, today)?;

    let summaries = aggregator.summaries();
    info!("reporting {} currencies", summaries.len());
    write_report(io::stdout().lock(), &summaries)?;
    Ok(())
}
