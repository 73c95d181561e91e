use std::io::{Read, Write};
use std::net::TcpListener;
use std::process::Stdio;
use std::thread;

use anyhow::Result;

use crate::CliTest;

/// Serve exactly one request with a canned JSON body on an ephemeral port.
fn serve_once(body: &str) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let endpoint = format!("http://{}", listener.local_addr()?);
    let body = body.to_string();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            // Drain the request head before answering.
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                match stream.read(&mut chunk) {
                    Ok(0) => break,
                    Ok(n) => {
                        request.extend_from_slice(&chunk[..n]);
                        if request.windows(4).any(|window| window == b"\r\n\r\n") {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }

            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    Ok(endpoint)
}

fn card_fixture() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file("component/card/index.js", "render(__i18n('你好'));\n")?;
    test.write_file("component/card/lang.json", r#"[{"zh_cn": "ok"}]"#)?;
    Ok(test)
}

#[test]
fn update_force_overwrites_registry() -> Result<()> {
    let test = card_fixture()?;
    let endpoint = serve_once(
        r#"{"errno": 0, "info": {"data": {
            "component|card": [{"Zh-CN": "ok"}, {"Zh-CN": "new"}]
        }}}"#,
    )?;

    let output = test
        .update_command()
        .args(["--project", "demo", "--endpoint", &endpoint, "--force"])
        .output()?;

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // Field names are normalized and the document is written with 4-space
    // indentation.
    let written = test.read_file("component/card/lang.json")?;
    assert_eq!(
        written,
        "[\n    {\n        \"zh_cn\": \"ok\"\n    },\n    {\n        \"zh_cn\": \"new\"\n    }\n]"
    );
    Ok(())
}

#[test]
fn update_prompt_no_leaves_file_untouched() -> Result<()> {
    let test = card_fixture()?;
    let original = test.read_file("component/card/lang.json")?;
    let endpoint = serve_once(
        r#"{"errno": 0, "info": {"data": {
            "component|card": [{"zh_cn": "ok"}, {"zh_cn": "new"}]
        }}}"#,
    )?;

    let mut cmd = test.update_command();
    cmd.args(["--project", "demo", "--endpoint", &endpoint]);
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn()?;
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"no\n")?;
    let output = child.wait_with_output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Find different fields"), "stdout: {stdout}");
    assert!(stdout.contains("user cancel"), "stdout: {stdout}");
    assert_eq!(test.read_file("component/card/lang.json")?, original);
    Ok(())
}

#[test]
fn update_with_empty_diff_issues_no_prompt_and_no_write() -> Result<()> {
    let test = card_fixture()?;
    let original = test.read_file("component/card/lang.json")?;
    let endpoint = serve_once(
        r#"{"errno": 0, "info": {"data": {
            "component|card": [{"zh_cn": "ok"}]
        }}}"#,
    )?;

    // stdin is closed: if a prompt were issued, the empty answer would
    // default to "yes" and rewrite the file.
    let output = test
        .update_command()
        .args(["--project", "demo", "--endpoint", &endpoint])
        .stdin(Stdio::null())
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Find different fields"), "stdout: {stdout}");
    assert_eq!(test.read_file("component/card/lang.json")?, original);
    Ok(())
}

#[test]
fn update_fails_on_nonzero_errno() -> Result<()> {
    let test = card_fixture()?;
    let endpoint = serve_once(r#"{"errno": 7, "info": {"data": {}}}"#)?;

    let output = test
        .update_command()
        .args(["--project", "demo", "--endpoint", &endpoint])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("errno 7"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn update_fails_on_unparseable_response() -> Result<()> {
    let test = card_fixture()?;
    let endpoint = serve_once("<html>busy</html>")?;

    let output = test
        .update_command()
        .args(["--project", "demo", "--endpoint", &endpoint])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to parse remote response"),
        "stderr: {stderr}"
    );
    Ok(())
}

#[test]
fn update_requires_an_endpoint() -> Result<()> {
    let test = card_fixture()?;

    let output = test
        .update_command()
        .args(["--project", "demo"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Remote endpoint is required"),
        "stderr: {stderr}"
    );
    Ok(())
}
