//! Доменные типы: бюллетень, записи о валютах и агрегаты.

use crate::error::Result;
use crate::utils::{parse_date, parse_nominal, parse_rate};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Курс, используем `Decimal` для точных расчётов.
pub type Money = Decimal;

/// Ежедневный бюллетень курсов на одну дату.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bulletin {
    /// Дата, на которую ЦБ установил курсы (атрибут `Date`, `dd.mm.yyyy`).
    pub date: String,
    /// Записи о валютах в порядке документа.
    pub entries: Vec<ValuteEntry>,
}

impl Bulletin {
    /// Разбирает дату установления курсов.
    #[inline]
    pub fn reference_date(&self) -> Result<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Котировка одной валюты в бюллетене, поля как в документе.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValuteEntry {
    /// Внутренний идентификатор ЦБ (`R01239`).
    pub id: String,
    /// Цифровой код ISO 4217.
    pub num_code: String,
    /// Буквенный код ISO 4217.
    pub char_code: String,
    /// Номинал, на который указан курс.
    pub nominal: String,
    /// Название валюты, ключ группировки.
    pub name: String,
    /// Курс с запятой в качестве разделителя.
    pub value: String,
}

impl ValuteEntry {
    /// Курс за одну единицу валюты.
    ///
    /// ```
    /// # use cbr_rates_report::ValuteEntry;
    /// # use rust_decimal::Decimal;
    /// let entry = ValuteEntry {
    ///     nominal: "100".into(),
    ///     value: "75,1234".into(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(entry.normalized_rate().unwrap(), Decimal::new(751_234, 6));
    /// ```
    pub fn normalized_rate(&self) -> Result<Money> {
        let rate = parse_rate(&self.value)?;
        let nominal = parse_nominal(&self.nominal)?;
        Ok(rate / Decimal::from(nominal))
    }
}

/// Наблюдение курса одной валюты на дату запроса.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuteStamp {
    /// Курс за единицу.
    pub value: Money,
    /// Дата запроса, `dd/mm/yyyy`.
    pub date: String,
}

/// Итоговая статистика по валюте за окно.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencySummary {
    /// Название валюты.
    pub name: String,
    /// Минимум и дата, когда он впервые встретился.
    pub min: ValuteStamp,
    /// Максимум и дата, когда он впервые встретился.
    pub max: ValuteStamp,
    /// Среднее арифметическое.
    pub avg: Money,
}
