//! Структурный разбор XML бюллетеня `ValCurs`.

use crate::error::Result;
use crate::raw::RawBulletin;
use crate::types::{Bulletin, ValuteEntry};
use serde::Deserialize;

/// Корневой элемент `<ValCurs Date="..." name="...">`.
#[derive(Debug, Deserialize)]
struct ValCurs {
    #[serde(rename = "@Date")]
    date: String,
    #[serde(rename = "Valute", default)]
    valutes: Vec<Valute>,
}

// Отсутствующие поля остаются пустыми и отсеиваются при агрегации.
#[derive(Debug, Deserialize)]
struct Valute {
    #[serde(rename = "@ID", default)]
    id: String,
    #[serde(rename = "NumCode", default)]
    num_code: String,
    #[serde(rename = "CharCode", default)]
    char_code: String,
    #[serde(rename = "Nominal", default)]
    nominal: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Value", default)]
    value: String,
}

impl From<Valute> for ValuteEntry {
    fn from(v: Valute) -> Self {
        Self {
            id: v.id,
            num_code: v.num_code,
            char_code: v.char_code,
            nominal: v.nominal,
            name: v.name,
            value: v.value,
        }
    }
}

impl RawBulletin {
    /// Разбирает документ в [`Bulletin`].
    pub fn parse(&self) -> Result<Bulletin> {
        let doc: ValCurs = quick_xml::de::from_str(&self.xml)?;
        Ok(Bulletin {
            date: doc.date,
            entries: doc.valutes.into_iter().map(ValuteEntry::from).collect(),
        })
    }
}

impl Bulletin {
    /// Декодирует и разбирает тело ответа ЦБ.
    ///
    /// ```
    /// # use cbr_rates_report::Bulletin;
    /// let xml = br#"<?xml version="1.0" encoding="windows-1251"?>
    /// <ValCurs Date="09.03.2024" name="Foreign Currency Market">
    ///   <Valute ID="R01239"><NumCode>978</NumCode><CharCode>EUR</CharCode>
    ///   <Nominal>1</Nominal><Name>Euro</Name><Value>98,7446</Value></Valute>
    /// </ValCurs>"#;
    /// let bulletin = Bulletin::from_bytes(xml).unwrap();
    /// assert_eq!(bulletin.date, "09.03.2024");
    /// assert_eq!(bulletin.entries[0].char_code, "EUR");
    /// ```
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        RawBulletin::from_bytes(bytes)?.parse()
    }
}
