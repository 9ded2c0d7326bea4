#![warn(missing_docs)]
//! Библиотека для загрузки ежедневных курсов ЦБ РФ и статистики за 90 дней.

mod aggregator;
mod charset;
mod error;
mod fetcher;
mod parser;
mod raw;
mod report;
mod types;
mod utils;

pub use crate::aggregator::{RateAggregator, avg, max, min};
pub use crate::charset::{Charset, decode_reader};
pub use crate::error::{RatesError, Result};
pub use crate::fetcher::{BASE_URL, BulletinSource, CbrClient};
pub use crate::raw::{RawBulletin, declared_encoding};
pub use crate::report::{render, write_report};
pub use crate::types::*;
pub use crate::utils::{
    WINDOW_DAYS, format_request_date, parse_date, parse_nominal, parse_rate, request_window,
};
