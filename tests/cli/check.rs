use anyhow::Result;

use crate::{CliTest, stderr, stdout};

const EN_MAIN: &str = r#"<context>
    <name>MainWindow</name>
    <message>
        <source>About {0}</source>
        <translation>About {0}</translation>
    </message>
    <message>
        <source>Help</source>
        <translation>Help</translation>
    </message>
</context>
"#;

const ES_MAIN: &str = r#"<context>
    <name>MainWindow</name>
    <message>
        <source>About {0}</source>
        <translation>Acerca de {0}</translation>
    </message>
    <message>
        <source>Help</source>
        <translation>Ayuda</translation>
    </message>
</context>
"#;

#[test]
fn test_check_clean_catalogs() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog("i18n/en.ts", "en", EN_MAIN)?;
    test.write_catalog("i18n/es.ts", "es", ES_MAIN)?;

    let output = test.tscat("check").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "\u{2713} Checked 2 catalog files - no issues found\n"
    );
    Ok(())
}

#[test]
fn test_check_reports_placeholder_mismatch() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog("i18n/en.ts", "en", EN_MAIN)?;
    test.write_catalog(
        "i18n/es.ts",
        "es",
        r#"<context>
    <name>MainWindow</name>
    <message>
        <source>About {0}</source>
        <translation>Acerca de</translation>
    </message>
    <message>
        <source>Help</source>
        <translation>Ayuda</translation>
    </message>
</context>
"#,
    )?;

    let output = test.tscat("check").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("error: \"MainWindow: About {0}\"  placeholder-mismatch"));
    assert!(out.contains("--> ./i18n/es.ts:7:9"));
    assert!(out.contains("(\"Acerca de\") missing {0}"));
    assert!(out.contains("1 problems (1 error, 0 warnings)"));
    Ok(())
}

#[test]
fn test_check_empty_source() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog(
        "i18n/en.ts",
        "en",
        r#"<context>
    <name>MainWindow</name>
    <message>
        <source></source>
        <translation>Orphaned text</translation>
    </message>
</context>
"#,
    )?;

    let output = test.tscat("check").arg("empty-source").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("empty-source"));
    Ok(())
}

#[test]
fn test_check_warnings_do_not_fail() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog("i18n/en.ts", "en", EN_MAIN)?;
    test.write_catalog(
        "i18n/es.ts",
        "es",
        r#"<context>
    <name>MainWindow</name>
    <message>
        <source>About {0}</source>
        <translation>Acerca de {0}</translation>
    </message>
    <message>
        <source>Help</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Donate</source>
        <translation type="vanished">Donar</translation>
    </message>
</context>
"#,
    )?;

    let output = test.tscat("check").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("untranslated"));
    assert!(out.contains("no translation in es"));
    assert!(out.contains("obsolete"));
    assert!(out.contains("2 problems (0 errors, 2 warnings)"));
    Ok(())
}

#[test]
fn test_check_replica_lag_and_orphan() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog("i18n/en.ts", "en", EN_MAIN)?;
    test.write_catalog(
        "i18n/es.ts",
        "es",
        r#"<context>
    <name>MainWindow</name>
    <message>
        <source>About {0}</source>
        <translation>Acerca de {0}</translation>
    </message>
    <message>
        <source>Quit</source>
        <translation>Salir</translation>
    </message>
</context>
"#,
    )?;

    let output = test
        .tscat("check")
        .args(["replica-lag", "orphan"])
        .output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("\"MainWindow: Help\"  replica-lag"));
    assert!(out.contains("missing in: es"));
    assert!(out.contains("\"MainWindow: Quit\"  orphan"));
    Ok(())
}

#[test]
fn test_check_skips_typescript_sources() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "export const greeting = 'hello';\n")?;
    test.write_catalog("i18n/en.ts", "en", EN_MAIN)?;

    let output = test.tscat("check").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Checked 1 catalog file - no issues found"));
    Ok(())
}

#[test]
fn test_check_parse_error_is_reported() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog("i18n/en.ts", "en", EN_MAIN)?;
    test.write_file(
        "i18n/es.ts",
        "<?xml version=\"1.0\"?>\n<TS language=\"es\">\n<context>\n<message>\n</TS>\n",
    )?;

    let output = test.tscat("check").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("parse-error"));
    assert!(out.contains("--> ./i18n/es.ts"));
    Ok(())
}

#[test]
fn test_check_source_root_and_primary_locale_flags() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog("app/i18n/en.ts", "en", EN_MAIN)?;
    test.write_catalog("app/i18n/es.ts", "es", ES_MAIN)?;

    let output = test
        .tscat("check")
        .args(["--source-root", "app", "--primary-locale", "es"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Checked 2 catalog files"));
    Ok(())
}

#[test]
fn test_check_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".tscatrc.json", r#"{ "primaryLocale": "english" }"#)?;

    let output = test.tscat("check").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("primaryLocale"));
    Ok(())
}
