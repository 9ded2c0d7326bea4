//! Исходный XML бюллетеня, приведённый к UTF-8.

use crate::charset::decode_reader;
use crate::error::{RatesError, Result};
use regex::bytes::Regex;
use std::io::Read;
use std::sync::LazyLock;

static ENCODING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\A(?:(?-u:\xEF\xBB\xBF))?\s*<\?xml[^>]*?",
        r#"\bencoding\s*=\s*["']([A-Za-z0-9._:\-]+)["']"#,
    ))
    .expect("valid encoding regex")
});

/// XML бюллетеня в UTF-8 без структурного разбора.
#[derive(Debug, Clone)]
pub struct RawBulletin {
    /// Полный текст документа.
    pub xml: String,
}

impl RawBulletin {
    /// Читает документ из произвольного `Read`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Декодирует байты документа по кодировке из XML-декларации.
    ///
    /// Без декларации или с `utf-8` текст должен быть корректным UTF-8,
    /// любая другая кодировка проходит через [`decode_reader`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let xml = match declared_encoding(bytes) {
            Some(label) if !is_utf8_label(&label) => decode_reader(&label, bytes)?,
            _ => std::str::from_utf8(bytes)
                .map_err(|_| RatesError::Decode { charset: "utf-8" })?
                .to_string(),
        };
        let xml = match xml.strip_prefix('\u{feff}') {
            Some(rest) => rest.to_string(),
            None => xml,
        };
        Ok(Self { xml })
    }

    /// Создаёт документ из готовой строки.
    #[inline]
    pub fn from_str(s: &str) -> Self {
        Self { xml: s.to_string() }
    }
}

/// Кодировка из XML-декларации, если она указана.
pub fn declared_encoding(bytes: &[u8]) -> Option<String> {
    ENCODING_RE
        .captures(bytes)
        .and_then(|caps| caps.get(1))
        .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
}

fn is_utf8_label(label: &str) -> bool {
    label.eq_ignore_ascii_case("utf-8") || label.eq_ignore_ascii_case("utf8")
}
