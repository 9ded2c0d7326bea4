use cbr_rates_report::{Bulletin, Charset, RatesError, RawBulletin, decode_reader};
use chrono::NaiveDate;

fn load_fixture(name: &str) -> Vec<u8> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read(path).expect("read fixture")
}

#[test]
fn parses_utf8_fixture() {
    let bulletin = Bulletin::from_bytes(&load_fixture("daily_eng.xml")).expect("parse fixture");
    assert_eq!(bulletin.date, "09.03.2024");
    assert_eq!(
        bulletin.reference_date().unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    );
    assert_eq!(bulletin.entries.len(), 10);

    let yen = &bulletin.entries[5];
    assert_eq!(yen.id, "R01820");
    assert_eq!(yen.num_code, "392");
    assert_eq!(yen.char_code, "JPY");
    assert_eq!(yen.nominal, "100");
    assert_eq!(yen.name, "Japanese Yen");
    assert_eq!(yen.value, "61,6771");
}

#[test]
fn decodes_windows_1251_fixture() {
    let bytes = load_fixture("daily_ru_1251.xml");
    // Кириллица в файле действительно однобайтовая.
    assert!(std::str::from_utf8(&bytes).is_err());

    let bulletin = Bulletin::from_bytes(&bytes).expect("parse fixture");
    let names: Vec<&str> = bulletin.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Евро", "Доллар США", "Японских иен"]);
}

#[test]
fn rejects_unsupported_charset() {
    let err = Charset::from_label("utf-16").unwrap_err();
    assert!(matches!(&err, RatesError::UnsupportedCharset { charset } if charset == "utf-16"));
    assert!(err.to_string().contains("utf-16"));

    let err = decode_reader("koi8-r", &b"abc"[..]).unwrap_err();
    assert!(matches!(err, RatesError::UnsupportedCharset { .. }));
}

#[test]
fn unsupported_declared_charset_is_fatal() {
    let xml = br#"<?xml version="1.0" encoding="utf-16"?><ValCurs Date="09.03.2024"></ValCurs>"#;
    let err = Bulletin::from_bytes(xml).unwrap_err();
    assert!(matches!(err, RatesError::UnsupportedCharset { .. }));
    assert!(err.is_fatal());
}

#[test]
fn malformed_xml_is_fatal() {
    let err = Bulletin::from_bytes(b"<ValCurs Date=\"09.03.2024\"><Valute>").unwrap_err();
    assert!(matches!(err, RatesError::Xml(_)));
    assert!(err.is_fatal());
}

#[test]
fn invalid_utf8_without_declaration_is_rejected() {
    let bytes = b"<ValCurs Date=\"09.03.2024\">\xC5\xE2</ValCurs>";
    let err = RawBulletin::from_bytes(bytes).unwrap_err();
    assert!(matches!(err, RatesError::Decode { charset: "utf-8" }));
}

#[test]
fn bulletin_without_valutes_is_empty() {
    let raw =
        RawBulletin::from_str(r#"<ValCurs Date="10.03.2024" name="Foreign Currency Market"/>"#);
    let bulletin = raw.parse().expect("parse empty bulletin");
    assert_eq!(bulletin.date, "10.03.2024");
    assert!(bulletin.entries.is_empty());
}

#[test]
fn reads_from_reader() {
    let bytes = load_fixture("daily_ru_1251.xml");
    let raw = RawBulletin::from_reader(bytes.as_slice()).expect("decode");
    assert!(raw.xml.contains("Доллар США"));
}
