use anyhow::Result;

use crate::{CliTest, stderr, stdout};

fn setup(test: &CliTest) -> Result<()> {
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
        <comment>menu</comment>
        <source>Open</source>
        <translation>Abrir</translation>
    </message>
</context>
"#,
    )?;
    test.write_catalog(
        "components/auto_shoutout/i18n/es.ts",
        "es",
        r#"<context>
    <name>AutoShoutOut</name>
    <message>
        <source>Follow {name}, last game played was {game}.</source>
        <translation>Sigue a {name}, su último juego fue {game}.</translation>
    </message>
    <message numerus="yes">
        <source>%n viewer(s)</source>
        <translation>
            <numerusform>%n espectador</numerusform>
            <numerusform>%n espectadores</numerusform>
        </translation>
    </message>
</context>
"#,
    )
}

#[test]
fn test_translate_positional() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test
        .tscat("translate")
        .args(["MainWindow", "About {0}", "--locale", "es_CO", "--arg", "EdoBot"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Acerca de EdoBot\n");
    Ok(())
}

#[test]
fn test_translate_named_from_component_catalog() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test
        .tscat("translate")
        .args([
            "AutoShoutOut",
            "Follow {name}, last game played was {game}.",
            "--locale",
            "es",
            "--named",
            "name=edo",
            "--named",
            "game=Chess",
        ])
        .output()?;

    assert_eq!(stdout(&output), "Sigue a edo, su último juego fue Chess.\n");
    Ok(())
}

#[test]
fn test_translate_plural() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let one = test
        .tscat("translate")
        .args(["AutoShoutOut", "%n viewer(s)", "--locale", "es", "-n", "1"])
        .output()?;
    let many = test
        .tscat("translate")
        .args(["AutoShoutOut", "%n viewer(s)", "--locale", "es", "-n", "7"])
        .output()?;

    assert_eq!(stdout(&one), "1 espectador\n");
    assert_eq!(stdout(&many), "7 espectadores\n");
    Ok(())
}

#[test]
fn test_translate_disambiguation_comment() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test
        .tscat("translate")
        .args(["MainWindow", "Open", "--locale", "es", "--comment", "menu"])
        .output()?;

    assert_eq!(stdout(&output), "Abrir\n");
    Ok(())
}

#[test]
fn test_translate_falls_back_to_source() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test
        .tscat("translate")
        .args(["MainWindow", "About {0}", "--locale", "de", "--arg", "EdoBot", "-v"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "About EdoBot\n");
    assert!(stderr(&output).contains("no translation in de"));
    Ok(())
}

#[test]
fn test_translate_invalid_locale() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test
        .tscat("translate")
        .args(["MainWindow", "Help", "--locale", "not a locale"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid --locale value"));
    Ok(())
}
