use anyhow::Result;

use crate::CliTest;

#[test]
fn init_creates_config_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));

    let content = test.read_file(".langctlrc.json")?;
    assert!(content.contains("endpoint"), "config: {content}");
    Ok(())
}

#[test]
fn init_refuses_to_overwrite_existing_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langctlrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"), "stderr: {stderr}");
    Ok(())
}
