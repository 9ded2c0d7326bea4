//! Вспомогательные парсеры чисел и дат, окно запросов.

use crate::error::{RatesError, Result};
use crate::types::Money;
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Глубина окна запросов в днях.
pub const WINDOW_DAYS: u32 = 90;

/// Формат даты в параметре `date_req`.
const REQUEST_DATE_FORMAT: &str = "%d/%m/%Y";

/// Нормализует числовую строку: убирает пробелы и меняет запятую на точку.
fn normalize_number(input: &str) -> String {
    input
        .chars()
        .filter(|ch| !matches!(*ch, ' ' | '\u{a0}' | '\u{202f}'))
        .map(|ch| if ch == ',' { '.' } else { ch })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Разбирает курс с запятой в качестве десятичного разделителя.
///
/// ```
/// # use cbr_rates_report::parse_rate;
/// # use rust_decimal::Decimal;
/// assert_eq!(parse_rate("75,1234").unwrap(), Decimal::new(751_234, 4));
/// ```
pub fn parse_rate(value: &str) -> Result<Money> {
    Decimal::from_str(&normalize_number(value)).map_err(|_| RatesError::Number {
        value: value.trim().to_string(),
        column: "Value",
    })
}

/// Разбирает номинал: строго положительное целое.
pub fn parse_nominal(value: &str) -> Result<u32> {
    match u32::from_str(value.trim()) {
        Ok(nominal) if nominal > 0 => Ok(nominal),
        _ => Err(RatesError::Number {
            value: value.trim().to_string(),
            column: "Nominal",
        }),
    }
}

/// Разбирает дату бюллетеня в формате `dd.mm.yyyy`.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%d.%m.%Y").map_err(|_| RatesError::Date {
        value: value.trim().to_string(),
    })
}

/// Форматирует дату запроса как `dd/mm/yyyy`.
#[inline]
pub fn format_request_date(date: NaiveDate) -> String {
    date.format(REQUEST_DATE_FORMAT).to_string()
}

/// Возвращает `days` дат по возрастанию, последняя из которых `today`.
///
/// ```
/// # use cbr_rates_report::request_window;
/// # use chrono::NaiveDate;
/// let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// let window = request_window(today, 90);
/// assert_eq!(window.first(), NaiveDate::from_ymd_opt(2023, 12, 12).as_ref());
/// assert_eq!(window.last(), Some(&today));
/// ```
pub fn request_window(today: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..days)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(u64::from(back))))
        .collect()
}
