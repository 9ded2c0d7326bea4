//! Ошибки загрузки, декодирования и разбора бюллетеней ЦБ.

/// Ошибка получения или разбора бюллетеня курсов.
#[derive(thiserror::Error, Debug)]
pub enum RatesError {
    /// Сетевая ошибка HTTP-клиента.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// Сервер ответил неуспешным статусом.
    #[error("HTTP {status} for {url}")]
    Status {
        /// Запрошенный адрес.
        url: String,
        /// Статус ответа.
        status: reqwest::StatusCode,
    },
    /// Ошибка ввода-вывода при чтении тела ответа.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Ошибка структурного разбора XML.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::DeError),
    /// В XML объявлена кодировка, которую мы не умеем декодировать.
    #[error("unsupported charset: {charset}")]
    UnsupportedCharset {
        /// Объявленная кодировка в исходном написании.
        charset: String,
    },
    /// Байты не соответствуют объявленной кодировке.
    #[error("malformed {charset} input")]
    Decode {
        /// Имя кодировки.
        charset: &'static str,
    },
    /// Ошибка разбора числового поля записи о валюте.
    #[error("Invalid number '{value}' in field '{column}'")]
    Number {
        /// Некорректное исходное значение.
        value: String,
        /// Имя поля.
        column: &'static str,
    },
    /// Ошибка разбора даты.
    #[error("Invalid date '{value}'")]
    Date {
        /// Некорректная дата.
        value: String,
    },
}

impl RatesError {
    /// Прерывает ли ошибка весь прогон.
    ///
    /// Ошибки в числовых полях отдельной записи локальны: запись пропускается.
    #[inline]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::Number { .. })
    }
}

/// Результат операций библиотеки.
pub type Result<T> = std::result::Result<T, RatesError>;
