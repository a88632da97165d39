use snaphttp_core::{BlockingClient, ClientConfig, ClientError};

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Serve one raw HTTP/1.1 response, byte for byte, to the first connection.
///
/// Needed for status lines and framing that mock servers normalise away.
fn serve_once(raw_response: &'static str) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let url = format!("http://{}/items/7", listener.local_addr().expect("addr"));

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let mut line = String::new();
        loop {
            line.clear();
            let read = reader.read_line(&mut line).expect("read request");
            if read == 0 || line == "\r\n" {
                break;
            }
        }
        stream
            .write_all(raw_response.as_bytes())
            .expect("write response");
    });

    (url, handle)
}

/// **VALUE**: Verifies the captured message is the server's own reason phrase.
///
/// **WHY THIS MATTERS**: Servers put meaning in non-standard phrases. Reporting the
/// canonical text instead shows the reader something the server never said.
///
/// **BUG THIS CATCHES**: Would catch the message being derived from the status code
/// instead of copied from the status line.
#[test]
fn given_custom_reason_phrase_when_getting_then_failure_keeps_status_line_text() {
    // GIVEN: A server answering with a non-canonical phrase
    let (url, server) = serve_once(
        "HTTP/1.1 404 Item Gone Away\r\nContent-Length: 4\r\nConnection: close\r\n\r\ngone",
    );
    let client = BlockingClient::new(&ClientConfig::default()).unwrap();

    // WHEN: Getting the resource
    let err = client.get(&url).unwrap_err();
    server.join().unwrap();

    // THEN: The status line text is captured verbatim
    let failure = err.status_failure().expect("expected a status failure");
    assert_eq!(failure.status_code(), "404");
    assert_eq!(failure.message(), "Item Gone Away");
    assert_eq!(failure.result(), Some("gone"));
    assert!(failure.to_string().ends_with("404 Item Gone Away"));
}

/// **VALUE**: Verifies a canonical phrase is still reported when the server sends one.
///
/// **BUG THIS CATCHES**: Would catch the canonical fallback being lost, leaving an
/// empty message for ordinary responses.
#[test]
fn given_canonical_reason_phrase_when_getting_then_message_is_canonical_text() {
    let (url, server) = serve_once(
        "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
    );
    let client = BlockingClient::new(&ClientConfig::default()).unwrap();

    let err = client.get(&url).unwrap_err();
    server.join().unwrap();

    let failure = err.status_failure().expect("expected a status failure");
    assert_eq!(failure.message(), "Service Unavailable");
    assert_eq!(failure.result(), Some(""));
}

/// **VALUE**: Verifies a failing status survives a body that cannot be read.
///
/// **WHY THIS MATTERS**: A 5xx whose connection drops mid-body is still a 5xx. If the
/// body error wins, the caller never learns the status code.
///
/// **BUG THIS CATCHES**: Would catch `ClientError::Body` being returned for failing
/// statuses.
#[test]
fn given_failing_status_with_truncated_body_when_getting_then_returns_status_failure() {
    // GIVEN: A 502 that promises 100 bytes and sends 4
    let (url, server) = serve_once(
        "HTTP/1.1 502 Bad Gateway\r\nContent-Length: 100\r\nConnection: close\r\n\r\npart",
    );
    let client = BlockingClient::new(&ClientConfig::default()).unwrap();

    // WHEN: Getting the resource
    let err = client.get(&url).unwrap_err();
    server.join().unwrap();

    // THEN: The status failure is returned, with no result
    let failure = err.status_failure().expect("expected a status failure");
    assert_eq!(failure.status_code(), "502");
    assert_eq!(failure.message(), "Bad Gateway");
    assert_eq!(failure.result(), None);
}

/// **VALUE**: Verifies a truncated body on a success still reports a body error.
///
/// **BUG THIS CATCHES**: Would catch the truncated-body path inventing a status failure
/// for a 2xx response.
#[test]
fn given_success_with_truncated_body_when_getting_then_returns_body_error() {
    let (url, server) = serve_once(
        "HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\npart",
    );
    let client = BlockingClient::new(&ClientConfig::default()).unwrap();

    let result = client.get(&url);
    server.join().unwrap();

    assert!(matches!(result, Err(ClientError::Body { .. })), "{result:?}");
}
