//! Накопление рядов курсов по валютам и их статистика.

use crate::error::Result;
use crate::fetcher::BulletinSource;
use crate::types::{CurrencySummary, Money, ValuteEntry, ValuteStamp};
use crate::utils::{WINDOW_DAYS, format_request_date, request_window};
use chrono::NaiveDate;
use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Ряды наблюдений по названиям валют.
#[derive(Debug, Clone, Default)]
pub struct RateAggregator {
    series: BTreeMap<String, Vec<ValuteStamp>>,
}

impl RateAggregator {
    /// Пустой агрегатор.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Загружает бюллетени за [`WINDOW_DAYS`] дней, заканчивая `today`.
    ///
    /// Первая же ошибка источника прерывает сбор.
    ///
    /// ```
    /// # use cbr_rates_report::{Bulletin, RateAggregator, Result, ValuteEntry};
    /// # use chrono::NaiveDate;
    /// let source = |_date: NaiveDate| -> Result<Bulletin> {
    ///     Ok(Bulletin {
    ///         date: "09.03.2024".into(),
    ///         entries: vec![ValuteEntry {
    ///             name: "Euro".into(),
    ///             nominal: "1".into(),
    ///             value: "98,7446".into(),
    ///             ..Default::default()
    ///         }],
    ///     })
    /// };
    /// let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    /// let aggregator = RateAggregator::collect(&source, today).unwrap();
    /// assert_eq!(aggregator.series("Euro").unwrap().len(), 90);
    /// ```
    pub fn collect<S: BulletinSource + ?Sized>(source: &S, today: NaiveDate) -> Result<Self> {
        let mut aggregator = Self::new();
        let mut accepted = 0;
        for date in request_window(today, WINDOW_DAYS) {
            let bulletin = source.fetch(date)?;
            debug!(
                "bulletin {} for {date}: {} entries",
                bulletin.date,
                bulletin.entries.len()
            );
            accepted += aggregator.ingest(date, &bulletin.entries);
        }
        info!(
            "collected {accepted} observations for {} currencies",
            aggregator.len()
        );
        Ok(aggregator)
    }

    /// Добавляет записи одного бюллетеня, запрошенного на `date`.
    ///
    /// Записи с некорректным курсом или номиналом пропускаются.
    /// Возвращает число принятых записей.
    pub fn ingest(&mut self, date: NaiveDate, entries: &[ValuteEntry]) -> usize {
        let date = format_request_date(date);
        let mut accepted = 0;
        for entry in entries {
            match entry.normalized_rate() {
                Ok(value) => {
                    self.series
                        .entry(entry.name.clone())
                        .or_insert_with(|| Vec::with_capacity(WINDOW_DAYS as usize))
                        .push(ValuteStamp {
                            value,
                            date: date.clone(),
                        });
                    accepted += 1;
                }
                Err(err) => warn!("{date}, {}: {err}", entry.name),
            }
        }
        accepted
    }

    /// Ряд наблюдений валюты.
    #[inline]
    pub fn series(&self, name: &str) -> Option<&[ValuteStamp]> {
        self.series.get(name).map(Vec::as_slice)
    }

    /// Названия валют по алфавиту.
    #[inline]
    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Число валют.
    #[inline]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Нет ни одного наблюдения.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Статистика по всем непустым рядам, по алфавиту.
    pub fn summaries(&self) -> Vec<CurrencySummary> {
        self.series
            .iter()
            .filter_map(|(name, stamps)| {
                let Some(mean) = avg(stamps) else {
                    if !stamps.is_empty() {
                        warn!("{name}: sum of rates overflows, currency skipped");
                    }
                    return None;
                };
                Some(CurrencySummary {
                    name: name.clone(),
                    min: min(stamps)?.clone(),
                    max: max(stamps)?.clone(),
                    avg: mean,
                })
            })
            .collect()
    }
}

/// Минимум ряда; при равенстве побеждает более раннее наблюдение.
pub fn min(stamps: &[ValuteStamp]) -> Option<&ValuteStamp> {
    stamps.iter().reduce(|best, s| if s.value < best.value { s } else { best })
}

/// Максимум ряда; при равенстве побеждает более раннее наблюдение.
pub fn max(stamps: &[ValuteStamp]) -> Option<&ValuteStamp> {
    stamps.iter().reduce(|best, s| if s.value > best.value { s } else { best })
}

/// Среднее арифметическое ряда.
///
/// `None` для пустого ряда и при переполнении суммы.
pub fn avg(stamps: &[ValuteStamp]) -> Option<Money> {
    if stamps.is_empty() {
        return None;
    }
    let sum = stamps
        .iter()
        .try_fold(Decimal::ZERO, |acc, s| acc.checked_add(s.value))?;
    Some(sum / Decimal::from(stamps.len()))
}
