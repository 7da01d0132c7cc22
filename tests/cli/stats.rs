use anyhow::Result;

use crate::{CliTest, stdout};

#[test]
fn test_stats_table() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog(
        "i18n/en.ts",
        "en",
        r#"<context>
    <name>MainWindow</name>
    <message>
        <source>Help</source>
        <translation>Help</translation>
    </message>
    <message>
        <source>Quit</source>
        <translation>Quit</translation>
    </message>
</context>
"#,
    )?;
    test.write_catalog(
        "i18n/es.ts",
        "es",
        r#"<context>
    <name>MainWindow</name>
    <message>
        <source>Help</source>
        <translation>Ayuda</translation>
    </message>
</context>
"#,
    )?;

    let output = test.command().arg("stats").output()?;

    assert_eq!(output.status.code(), Some(0));
    insta::assert_snapshot!(stdout(&output), @r"
    catalog       locale  messages  finished  unfinished  obsolete  lagging  coverage
    ./i18n/en.ts  en             2         2           0         0        -    100.0%
    ./i18n/es.ts  es             1         1           0         0        1    100.0%
    ");
    Ok(())
}

#[test]
fn test_stats_without_catalogs() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("stats").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "No catalog files found.\n");
    Ok(())
}
