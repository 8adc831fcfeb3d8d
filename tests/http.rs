use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use assert_matches::assert_matches;

use ena_taxon_metadata::domain::FieldSet;
use ena_taxon_metadata::ena::{EnaClient, EnaHttpClient, SearchQuery};
use ena_taxon_metadata::error::EnaError;

/// Serves one canned response and hands back the raw request head.
fn serve_once(status: &str, body: &'static [u8]) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let status = status.to_string();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.write_all(body).unwrap();
        stream.flush().unwrap();
        tx.send(String::from_utf8_lossy(&head).into_owned()).unwrap();
    });
    (format!("http://{addr}/ena/portal/api/search"), rx)
}

fn request_target(head: &str) -> String {
    head.lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap()
        .to_string()
}

#[test]
fn success_returns_body_bytes() {
    let body: &'static [u8] = b"[{\"run_accession\":\"ERR000001\"}]";
    let (url, rx) = serve_once("200 OK", body);
    let client = EnaHttpClient::with_base_url(url).unwrap();

    let query = SearchQuery::new("9606".parse().unwrap());
    let payload = client.search(&query).unwrap();
    assert_eq!(payload, body);

    let head = rx.recv().unwrap();
    assert!(head.starts_with("GET /ena/portal/api/search?"));
    assert!(head.to_ascii_lowercase().contains("user-agent: ena-taxon-metadata/"));
}

#[test]
fn query_string_is_url_encoded_in_order() {
    let (url, rx) = serve_once("200 OK", b"[]");
    let client = EnaHttpClient::with_base_url(url).unwrap();
    let query = SearchQuery::new("9606".parse().unwrap()).with_fields(FieldSet::Original.fields());
    client.search(&query).unwrap();

    let target = request_target(&rx.recv().unwrap());
    let (_, query_string) = target.split_once('?').unwrap();
    let pairs = query_string.split('&').collect::<Vec<_>>();
    assert_eq!(pairs[0], "query=tax_tree%289606%29");
    assert_eq!(pairs[1], "result=read_run");
    assert_eq!(pairs[2], "format=JSON");
    assert_eq!(pairs[3], "instrument_platform=illumina");
    assert_eq!(pairs[4], "library_source=TRANSCRIPTOMIC");
    assert_eq!(pairs[5], "limit=0");
    assert_eq!(
        pairs[6],
        format!("fields={}", FieldSet::Original.fields().join("%2C"))
    );
}

#[test]
fn not_found_is_status_error() {
    let (url, _rx) = serve_once("404 Not Found", b"no such taxon");
    let client = EnaHttpClient::with_base_url(url).unwrap();
    let err = client
        .search(&SearchQuery::new("0".parse().unwrap()))
        .unwrap_err();
    assert_matches!(
        err,
        EnaError::EnaStatus { status: 404, message } if message == "no such taxon"
    );
}

#[test]
fn server_error_is_status_error() {
    let (url, _rx) = serve_once("500 Internal Server Error", b"");
    let client = EnaHttpClient::with_base_url(url).unwrap();
    let err = client
        .search(&SearchQuery::new("9606".parse().unwrap()))
        .unwrap_err();
    assert_matches!(err, EnaError::EnaStatus { status: 500, .. });
}

#[test]
fn connection_failure_is_http_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = EnaHttpClient::with_base_url(format!("http://{addr}/search")).unwrap();
    let err = client
        .search(&SearchQuery::new("9606".parse().unwrap()))
        .unwrap_err();
    assert_matches!(err, EnaError::EnaHttp(_));
}
