use anyhow::Result;

use crate::{CliTest, stdout};

const ES_WITH_LEFTOVERS: &str = r#"<context>
    <name>AutoShoutOut</name>
    <message>
        <location filename="../__init__.py" line="63"/>
        <source>Enabled</source>
        <translation>Habilitado</translation>
    </message>
    <message>
        <location filename="../__init__.py" line="120"/>
        <source>Enabled</source>
        <translation>Activado</translation>
    </message>
    <message>
        <source>Delay</source>
        <translation type="vanished">Retraso</translation>
    </message>
</context>
<context>
    <name>Legacy</name>
    <message>
        <source>Old button</source>
        <translation type="vanished">Botón viejo</translation>
    </message>
</context>
"#;

#[test]
fn test_clean_dry_run_leaves_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog("i18n/es.ts", "es", ES_WITH_LEFTOVERS)?;
    let before = test.read_file("i18n/es.ts")?;

    let output = test.tscat("clean").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("remove ./i18n/es.ts:8"));
    assert!(out.contains("Would remove 3 entry(s) in 1 file(s)."));
    assert!(out.contains("--apply"));
    assert_eq!(test.read_file("i18n/es.ts")?, before);
    Ok(())
}

#[test]
fn test_clean_apply_rewrites_catalog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog("i18n/es.ts", "es", ES_WITH_LEFTOVERS)?;

    let output = test.tscat("clean").arg("--apply").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("Removed 3 entry(s) in 1 file(s)"));

    let content = test.read_file("i18n/es.ts")?;
    assert!(content.contains("<translation>Activado</translation>"));
    assert!(!content.contains("Habilitado"));
    assert!(!content.contains("Retraso"));
    assert!(!content.contains("<name>Legacy</name>"));
    assert!(content.contains("<location filename=\"../__init__.py\" line=\"120\"/>"));

    // Nothing left to clean
    let output = test.tscat("clean").output()?;
    assert!(stdout(&output).contains("no issues found"));
    Ok(())
}

#[test]
fn test_clean_selected_rule_only() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog("i18n/es.ts", "es", ES_WITH_LEFTOVERS)?;

    let output = test
        .tscat("clean")
        .args(["--rules", "obsolete", "--apply"])
        .output()?;

    assert!(stdout(&output).contains("Removed 2 entry(s) in 1 file(s)"));
    let content = test.read_file("i18n/es.ts")?;
    assert!(content.contains("Habilitado"));
    assert!(content.contains("Activado"));
    assert!(!content.contains("Retraso"));
    Ok(())
}
