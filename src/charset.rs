//! Декодирование однобайтовой кириллицы, в которой ЦБ отдаёт XML.

use crate::error::{RatesError, Result};
use encoding_rs::WINDOWS_1251;
use std::io::Read;

/// Поддерживаемые не-UTF-8 кодировки.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// `windows-1251`.
    Windows1251,
}

impl Charset {
    /// Находит кодировку по имени из XML-декларации.
    ///
    /// ```
    /// # use cbr_rates_report::Charset;
    /// assert_eq!(Charset::from_label("Windows-1251").unwrap(), Charset::Windows1251);
    /// assert!(Charset::from_label("utf-16").is_err());
    /// ```
    pub fn from_label(label: &str) -> Result<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "windows-1251" | "cp1251" => Ok(Self::Windows1251),
            _ => Err(RatesError::UnsupportedCharset {
                charset: label.to_string(),
            }),
        }
    }

    /// Каноническое имя кодировки.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Windows1251 => "windows-1251",
        }
    }

    /// Декодирует байты в строку.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        let encoding = match self {
            Self::Windows1251 => WINDOWS_1251,
        };
        let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
        if had_errors {
            return Err(RatesError::Decode {
                charset: self.name(),
            });
        }
        Ok(text.into_owned())
    }
}

/// Читает поток в объявленной кодировке и возвращает текст.
pub fn decode_reader<R: Read>(label: &str, mut reader: R) -> Result<String> {
    let charset = Charset::from_label(label)?;
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    charset.decode(&bytes)
}
