//! Integration tests for the fetch collaborator.
//!
//! Each test starts a one-shot HTTP server on a loopback port, serves a canned
//! response, and points the fetcher at it.

use laxjson_fetch::{FetchConfig, FetchError, Fetcher, DEFAULT_TIMEOUT};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

/// `{"zipped":"yes",\n"n":[1,2]}\n`, gzip-compressed.
const GZIPPED_BODY: [u8; 48] = [
    0x1f, 0x8b, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x03, 0xab, 0x56, 0xaa, 0xca, 0x2c, 0x28,
    0x48, 0x4d, 0x51, 0xb2, 0x52, 0xaa, 0x4c, 0x2d, 0x56, 0xd2, 0xe1, 0x52, 0xca, 0x53, 0xb2, 0x8a,
    0x36, 0xd4, 0x31, 0x8a, 0xad, 0xe5, 0x02, 0x00, 0x1c, 0xb3, 0xc4, 0x2d, 0x1c, 0x00, 0x00, 0x00,
];

/// Helper: serve one response and return the URL to request.
fn serve_once(status: &str, headers: &[(&str, &str)], body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    let mut head = format!("HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n", body.len());
    for (name, value) in headers {
        head.push_str(&format!("{name}: {value}\r\n"));
    }
    head.push_str("\r\n");

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).expect("read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        stream.write_all(head.as_bytes()).expect("write head");
        stream.write_all(&body).expect("write body");
    });

    format!("http://{addr}/doc.json")
}

fn fast_fetcher() -> Fetcher {
    Fetcher::new(FetchConfig {
        connect_timeout: Duration::from_secs(5),
        read_timeout: Duration::from_secs(5),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn default_timeouts_are_100_seconds() {
    let config = FetchConfig::default();
    assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(100));
    assert_eq!(config.connect_timeout, DEFAULT_TIMEOUT);
    assert_eq!(config.read_timeout, DEFAULT_TIMEOUT);
}

// ─────────────────────────────────────────────────────────────────────────────
// Successful fetches
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fetch_returns_body_with_lines_joined() {
    let url = serve_once(
        "200 OK",
        &[("Content-Type", "application/json")],
        b"{\"a\":\"1\",\r\n\"b\":\"2\"}\n".to_vec(),
    );
    let body = fast_fetcher().fetch(&url);
    assert_eq!(body.as_deref(), Some(r#"{"a":"1","b":"2"}"#));
}

#[test]
fn get_json_parses_body() {
    let url = serve_once(
        "200 OK",
        &[],
        br#"{"status":"ok","items":[{"id":1},{"id":2}]}"#.to_vec(),
    );
    let obj = fast_fetcher().get_json(&url).expect("object");
    assert_eq!(obj.get_str("status").unwrap(), Some("ok"));
    assert_eq!(obj.get_object_array("items").unwrap().map(<[_]>::len), Some(2));
}

#[test]
fn get_json_of_empty_object_is_none() {
    let url = serve_once("200 OK", &[], b"{}".to_vec());
    assert_eq!(fast_fetcher().get_json(&url), None);
}

#[test]
fn fetch_decompresses_gzip_body() {
    let url = serve_once(
        "200 OK",
        &[("Content-Encoding", "gzip")],
        GZIPPED_BODY.to_vec(),
    );
    let obj = fast_fetcher().get_json(&url).expect("object");
    assert_eq!(obj.get_str("zipped").unwrap(), Some("yes"));
    assert_eq!(obj.get_numbers("n").unwrap().map(<[_]>::len), Some(2));
}

// ─────────────────────────────────────────────────────────────────────────────
// Failures
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fetch_error_status_is_none() {
    let url = serve_once("404 Not Found", &[], b"missing".to_vec());
    assert_eq!(fast_fetcher().fetch(&url), None);
}

#[test]
fn try_fetch_reports_status_code() {
    let url = serve_once("500 Internal Server Error", &[], b"boom".to_vec());
    let err = fast_fetcher().try_fetch(&url).unwrap_err();
    assert!(matches!(err, FetchError::Status { code: 500, .. }), "got {err:?}");
}

#[test]
fn fetch_connection_refused_is_none() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        listener.local_addr().expect("local addr")
    };
    let url = format!("http://{addr}/doc.json");
    let fetcher = fast_fetcher();
    assert!(matches!(fetcher.try_fetch(&url), Err(FetchError::Transport(_))));
    assert_eq!(fetcher.get_json(&url), None);
}

#[test]
fn fetch_invalid_url_is_none() {
    assert_eq!(laxjson_fetch::fetch("not a url"), None);
}
