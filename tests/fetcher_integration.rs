use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use cbr_rates_report::{BulletinSource, CbrClient, RatesError};
use chrono::NaiveDate;

fn load_fixture(name: &str) -> Vec<u8> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read(path).expect("read fixture")
}

/// Отвечает на один запрос и возвращает его стартовую строку.
fn serve_once(status: &'static str, body: Vec<u8>) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("read request");
        loop {
            let mut line = String::new();
            let n = reader.read_line(&mut line).expect("read header");
            if n == 0 || line == "\r\n" {
                break;
            }
        }
        let head = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/xml\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(head.as_bytes()).expect("write head");
        stream.write_all(&body).expect("write body");
        request_line.trim_end().to_string()
    });
    (format!("http://{addr}/scripts/XML_daily_eng.asp"), handle)
}

fn local_client(base_url: String) -> CbrClient {
    let http = reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .expect("build client");
    CbrClient::with_client(http, base_url)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn fetches_and_decodes_windows_1251_bulletin() {
    let (base_url, server) = serve_once("200 OK", load_fixture("daily_ru_1251.xml"));
    let client = local_client(base_url);

    let bulletin = client.fetch(date(2024, 3, 9)).expect("fetch bulletin");
    assert_eq!(bulletin.date, "09.03.2024");
    let names: Vec<&str> = bulletin.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Евро", "Доллар США", "Японских иен"]);

    let request_line = server.join().unwrap();
    assert_eq!(
        request_line,
        "GET /scripts/XML_daily_eng.asp?date_req=09/03/2024 HTTP/1.1"
    );
}

#[test]
fn server_error_is_status_error() {
    let (base_url, server) = serve_once("500 Internal Server Error", b"oops".to_vec());
    let client = local_client(base_url.clone());

    let err = client.fetch(date(2024, 3, 9)).unwrap_err();
    match &err {
        RatesError::Status { url, status } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(url, &format!("{base_url}?date_req=09/03/2024"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.is_fatal());
    server.join().unwrap();
}

#[test]
fn malformed_body_is_fatal() {
    let (base_url, server) = serve_once("200 OK", b"<ValCurs Date=\"09.03.2024\">".to_vec());
    let client = local_client(base_url);

    let err = client.fetch(date(2024, 3, 9)).unwrap_err();
    assert!(matches!(err, RatesError::Xml(_)));
    server.join().unwrap();
}

#[test]
fn custom_base_url_builds_request_url() {
    let client = CbrClient::with_base_url("http://localhost:8080/daily").unwrap();
    assert_eq!(
        client.bulletin_url(date(2023, 12, 12)),
        "http://localhost:8080/daily?date_req=12/12/2023"
    );
}
