use anyhow::Result;

use crate::CliTest;

#[test]
fn check_reports_missing_fields() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("component/card/index.js", "render(__i18n('hello'));\n")?;
    test.write_file("component/card/lang.json", r#"[{"zh_cn": "ok"}]"#)?;

    let output = test
        .check_command()
        .args(["--project", "demo"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("needs the following fields"),
        "stdout: {stdout}"
    );
    assert!(stdout.contains("hello"), "stdout: {stdout}");
    Ok(())
}

#[test]
fn check_passes_when_registry_covers_usages() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("component/card/index.js", "render(__i18n('hello'));\n")?;
    test.write_file("component/card/lang.json", r#"[{"zh_cn": "hello"}]"#)?;

    let output = test
        .check_command()
        .args(["--project", "demo"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn check_requires_project_name() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("component/card/index.js", "")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Project name is required"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn check_takes_project_name_from_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langctlrc.json", r#"{"project": "demo"}"#)?;
    test.write_file("component/card/index.js", "render(__i18n('hello'));\n")?;
    test.write_file("component/card/lang.json", r#"[{"zh_cn": "hello"}]"#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn check_survives_malformed_registry() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("component/card/index.js", "render(__i18n('hello'));\n")?;
    test.write_file("component/card/lang.json", "{broken")?;

    let output = test
        .check_command()
        .args(["--project", "demo"])
        .output()?;

    // The malformed registry is reported, the run completes, and the
    // unmatched usage surfaces as a coverage failure.
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse registry"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn check_filter_excludes_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("component/card/index.js", "render(__i18n('hello'));\n")?;
    test.write_file("component/card/lang.json", r#"[{"zh_cn": "ok"}]"#)?;

    let output = test
        .check_command()
        .args(["--project", "demo", "--filter", "nothing-matches"])
        .output()?;

    // Everything is pre-filtered away, so there is nothing to report.
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}
