//! Serializer producing `.ts` files in the layout lupdate writes.

use std::{fmt::Write as _, fs, path::Path};

use quick_xml::escape::escape;

use crate::core::{
    data::{Catalog, Message, Translation},
    error::CatalogError,
};

/// Serialize a catalog. Parsing the output yields the same model, apart
/// from line/column positions and relative location lines.
pub fn write_ts(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str("<TS");
    if let Some(version) = &catalog.version {
        let _ = write!(out, " version=\"{}\"", escape(version));
    }
    let _ = write!(out, " language=\"{}\"", escape(&catalog.language));
    if let Some(source_language) = &catalog.source_language {
        let _ = write!(out, " sourcelanguage=\"{}\"", escape(source_language));
    }
    out.push_str(">\n");

    for context in &catalog.contexts {
        out.push_str("<context>\n");
        element(&mut out, 1, "name", &context.name);
        for message in &context.messages {
            write_message(&mut out, message);
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}

/// Serialize a catalog to `path`.
pub fn write_ts_file(catalog: &Catalog, path: &Path) -> Result<(), CatalogError> {
    fs::write(path, write_ts(catalog)).map_err(|source| CatalogError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    })
}

fn write_message(out: &mut String, message: &Message) {
    indent(out, 1);
    if message.is_numerus() {
        out.push_str("<message numerus=\"yes\">\n");
    } else {
        out.push_str("<message>\n");
    }

    for location in &message.locations {
        indent(out, 2);
        let _ = write!(out, "<location filename=\"{}\"", escape(&location.filename));
        if let Some(line) = location.line {
            let _ = write!(out, " line=\"{}\"", line);
        }
        out.push_str("/>\n");
    }

    element(out, 2, "source", &message.source);
    optional_element(out, 2, "oldsource", message.old_source.as_deref());
    optional_element(out, 2, "comment", message.comment.as_deref());
    optional_element(out, 2, "extracomment", message.extra_comment.as_deref());
    optional_element(out, 2, "translatorcomment", message.translator_comment.as_deref());

    indent(out, 2);
    out.push_str("<translation");
    if let Some(state) = message.state.as_attr() {
        let _ = write!(out, " type=\"{}\"", state);
    }
    out.push('>');
    match &message.translation {
        Translation::Single(text) => out.push_str(&escape(text)),
        Translation::Numerus(forms) => {
            out.push('\n');
            for form in forms {
                element(out, 3, "numerusform", form);
            }
            indent(out, 2);
        }
    }
    out.push_str("</translation>\n");

    indent(out, 1);
    out.push_str("</message>\n");
}

fn element(out: &mut String, depth: usize, name: &str, text: &str) {
    indent(out, depth);
    let _ = writeln!(out, "<{name}>{}</{name}>", escape(text));
}

fn optional_element(out: &mut String, depth: usize, name: &str, text: Option<&str>) {
    if let Some(text) = text {
        element(out, depth, name, text);
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("    ");
    }
}
