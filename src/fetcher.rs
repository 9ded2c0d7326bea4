//! Загрузка ежедневных бюллетеней с сайта ЦБ.

use crate::error::{RatesError, Result};
use crate::types::Bulletin;
use crate::utils::format_request_date;
use chrono::NaiveDate;
use log::debug;

/// Адрес ежедневного бюллетеня на английском.
pub const BASE_URL: &str = "http://www.cbr.ru/scripts/XML_daily_eng.asp";

const USER_AGENT: &str = concat!("cbr-rates-report/", env!("CARGO_PKG_VERSION"));

/// Источник бюллетеня на заданную дату.
pub trait BulletinSource {
    /// Возвращает бюллетень, действующий на `date`.
    fn fetch(&self, date: NaiveDate) -> Result<Bulletin>;
}

impl<F> BulletinSource for F
where
    F: Fn(NaiveDate) -> Result<Bulletin>,
{
    #[inline]
    fn fetch(&self, date: NaiveDate) -> Result<Bulletin> {
        self(date)
    }
}

/// Блокирующий HTTP-клиент ЦБ.
#[derive(Debug, Clone)]
pub struct CbrClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl CbrClient {
    /// Создаёт клиент для [`BASE_URL`] с собственным `User-Agent`.
    #[inline]
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    /// Создаёт клиент для другого адреса бюллетеня.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Оборачивает готовый HTTP-клиент.
    #[inline]
    pub fn with_client(client: reqwest::blocking::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Адрес бюллетеня на дату.
    ///
    /// ```
    /// # use cbr_rates_report::CbrClient;
    /// # use chrono::NaiveDate;
    /// let client = CbrClient::new().unwrap();
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    /// assert_eq!(
    ///     client.bulletin_url(date),
    ///     "http://www.cbr.ru/scripts/XML_daily_eng.asp?date_req=09/03/2024"
    /// );
    /// ```
    pub fn bulletin_url(&self, date: NaiveDate) -> String {
        format!("{}?date_req={}", self.base_url, format_request_date(date))
    }
}

impl BulletinSource for CbrClient {
    fn fetch(&self, date: NaiveDate) -> Result<Bulletin> {
        let url = self.bulletin_url(date);
        debug!("GET {url}");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(RatesError::Status { url, status });
        }
        // Тело читается целиком, ответ освобождается до разбора.
        let body = response.bytes()?;
        Bulletin::from_bytes(&body)
    }
}
