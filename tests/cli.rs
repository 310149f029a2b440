//! Tests for the `health-server` binary's process contract.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::process::{Command, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_health-server");
const BANNER_PREFIX: &str = "Health server listening on :";

#[test]
fn prints_banner_and_serves_health() {
    let mut child = Command::new(BIN)
        .args(["--bind", "127.0.0.1", "--port", "0"])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to launch binary");

    let stdout = child.stdout.take().unwrap();
    let mut first_line = String::new();
    BufReader::new(stdout).read_line(&mut first_line).unwrap();

    let port: u16 = first_line
        .trim_end()
        .strip_prefix(BANNER_PREFIX)
        .unwrap_or_else(|| panic!("unexpected banner: {:?}", first_line))
        .parse()
        .unwrap();
    assert_ne!(port, 0);

    let mut stream = TcpStream::connect(("127.0.0.1", port)).unwrap();
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).unwrap();

    child.kill().unwrap();
    let _ = child.wait();

    assert!(response.starts_with("HTTP/1.1 200 OK"), "{}", response);
    assert!(response.ends_with("\r\n\r\nOK"), "{}", response);
}

#[test]
fn exits_non_zero_when_port_is_taken() {
    let held = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = held.local_addr().unwrap().port().to_string();

    let output = Command::new(BIN)
        .args(["--bind", "127.0.0.1", "--port", &port])
        .output()
        .expect("failed to launch binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "banner printed despite bind failure");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to bind"), "{}", stderr);
}

#[test]
fn exits_non_zero_on_invalid_bind_address() {
    let output = Command::new(BIN)
        .args(["--bind", "not-an-ip", "--port", "0"])
        .output()
        .expect("failed to launch binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is not an IP address"), "{}", stderr);
}
