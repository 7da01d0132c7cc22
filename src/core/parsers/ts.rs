//! Reader for Qt Linguist `.ts` translation tables.
//!
//! The file is streamed with `quick-xml`; text inside `<source>`,
//! `<translation>` and the comment elements is kept verbatim (only XML
//! entities are decoded). Elements this reader does not know about are
//! skipped, so newer lupdate output still loads.

use std::{collections::HashMap, fs, path::Path};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::core::{
    data::{Catalog, Context, Message, Provenance, Translation, TranslationState},
    error::CatalogError,
};

/// Read and parse a catalog from disk.
pub fn parse_ts_file(path: &Path) -> Result<Catalog, CatalogError> {
    let file_path = path.to_string_lossy().to_string();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: file_path.clone(),
        source,
    })?;
    parse_ts_str(&content, &file_path)
}

/// Parse catalog content. `file_path` is used for diagnostics and as the
/// language fallback when the `<TS>` element has no `language` attribute.
pub fn parse_ts_str(content: &str, file_path: &str) -> Result<Catalog, CatalogError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    TsParser::new(content, file_path).parse()
}

/// Cheap check used by the scanner: does this look like a translation table
/// rather than, say, a TypeScript module sharing the `.ts` extension?
pub fn looks_like_ts_catalog(content: &str) -> bool {
    let head: String = content.chars().take(1024).collect();
    head.trim_start_matches('\u{feff}').trim_start().starts_with('<') && head.contains("<TS")
}

/// Byte offsets of line starts, for O(log n) offset -> line/column lookups.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(content: &str) -> Self {
        let mut starts = vec![0];
        for (i, c) in content.char_indices() {
            if c == '\n' {
                starts.push(i + 1);
            }
        }
        Self { starts }
    }

    /// 1-based line of a byte offset.
    fn line(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// 1-based (line, column) of a byte offset. Columns count characters.
    fn position(&self, content: &str, offset: usize) -> (usize, usize) {
        let line = self.line(offset);
        let start = self.starts[line - 1];
        let col = content
            .get(start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(0);
        (line, col + 1)
    }
}

#[derive(Default)]
struct PendingMessage {
    message: Message,
    numerus: bool,
    has_source: bool,
    has_translation: bool,
    forms: Vec<String>,
    line: usize,
}

struct TsParser<'a> {
    content: &'a str,
    file_path: &'a str,
    lines: LineIndex,
    catalog: Option<Catalog>,
    context: Option<Context>,
    message: Option<PendingMessage>,
    /// Text of the leaf element being read, if any.
    text: Option<String>,
    /// Last absolute line seen per provenance file, for `line="+N"` locations.
    last_location: HashMap<String, u32>,
    last_filename: Option<String>,
}

impl<'a> TsParser<'a> {
    fn new(content: &'a str, file_path: &'a str) -> Self {
        Self {
            content,
            file_path,
            lines: LineIndex::new(content),
            catalog: None,
            context: None,
            message: None,
            text: None,
            last_location: HashMap::new(),
            last_filename: None,
        }
    }

    fn parse(mut self) -> Result<Catalog, CatalogError> {
        let mut reader = Reader::from_str(self.content);

        loop {
            let offset = reader.buffer_position() as usize;
            let event = reader.read_event().map_err(|source| CatalogError::Xml {
                path: self.file_path.to_string(),
                line: self.lines.line(reader.error_position() as usize),
                source,
            })?;

            match event {
                Event::Start(e) => self.start(&e, offset)?,
                Event::Empty(e) => {
                    self.start(&e, offset)?;
                    self.end(e.name().as_ref(), offset)?;
                }
                Event::End(e) => self.end(e.name().as_ref(), offset)?,
                Event::Text(t) => {
                    if self.text.is_some() {
                        let decoded = t.unescape().map_err(|err| {
                            self.structure_error(offset, format!("invalid text: {err}"))
                        })?;
                        if let Some(buf) = self.text.as_mut() {
                            buf.push_str(&decoded);
                        }
                    }
                }
                Event::CData(c) => {
                    if let Some(buf) = self.text.as_mut() {
                        buf.push_str(&String::from_utf8_lossy(&c));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        let mut catalog = self
            .catalog
            .take()
            .ok_or_else(|| CatalogError::structure(self.file_path, 1, "missing <TS> root element"))?;

        if catalog.language.is_empty() {
            catalog.language = language_from_path(self.file_path)
                .ok_or_else(|| CatalogError::MissingLanguage {
                    path: self.file_path.to_string(),
                })?;
        }

        Ok(catalog)
    }

    fn start(&mut self, e: &BytesStart<'_>, offset: usize) -> Result<(), CatalogError> {
        let name = e.name();
        let name = name.as_ref();

        if self.catalog.is_none() {
            if name != b"TS" {
                return Err(self.structure_error(offset, "expected <TS> root element"));
            }
            let mut catalog = Catalog::new(self.attribute(e, "language", offset)?.unwrap_or_default());
            catalog.file_path = self.file_path.to_string();
            catalog.source_language = self
                .attribute(e, "sourcelanguage", offset)?
                .filter(|s| !s.is_empty());
            catalog.version = self.attribute(e, "version", offset)?;
            self.catalog = Some(catalog);
            return Ok(());
        }

        match name {
            b"TS" => return Err(self.structure_error(offset, "nested <TS> element")),
            b"context" => {
                if self.context.is_some() {
                    return Err(self.structure_error(offset, "nested <context> element"));
                }
                self.context = Some(Context {
                    line: self.lines.line(offset),
                    ..Default::default()
                });
                self.last_location.clear();
                self.last_filename = None;
            }
            b"name" if self.context.is_some() && self.message.is_none() => {
                self.text = Some(String::new());
            }
            b"message" => {
                if self.context.is_none() {
                    return Err(self.structure_error(offset, "<message> outside of <context>"));
                }
                let numerus = self.attribute(e, "numerus", offset)?.as_deref() == Some("yes");
                self.message = Some(PendingMessage {
                    numerus,
                    line: self.lines.line(offset),
                    ..Default::default()
                });
            }
            b"location" if self.message.is_some() => {
                let provenance = self.location(e, offset)?;
                if let Some(pending) = self.message.as_mut() {
                    pending.message.locations.push(provenance);
                }
            }
            b"source" => {
                let (line, col) = self.lines.position(self.content, offset);
                let pending = self.pending(offset, "<source>")?;
                pending.message.line = line;
                pending.message.col = col;
                self.text = Some(String::new());
            }
            b"comment" | b"extracomment" | b"translatorcomment" | b"oldsource"
                if self.message.is_some() =>
            {
                self.text = Some(String::new());
            }
            b"translation" => {
                let state = TranslationState::from_attr(self.attribute(e, "type", offset)?.as_deref());
                let pending = self.pending(offset, "<translation>")?;
                pending.message.state = state;
                pending.has_translation = true;
                if !pending.numerus {
                    self.text = Some(String::new());
                }
            }
            b"numerusform" if self.message.as_ref().is_some_and(|m| m.numerus) => {
                self.text = Some(String::new());
            }
            _ => {}
        }

        Ok(())
    }

    fn end(&mut self, name: &[u8], offset: usize) -> Result<(), CatalogError> {
        match name {
            b"context" => {
                let Some(context) = self.context.take() else {
                    return Ok(());
                };
                if context.name.is_empty() {
                    return Err(CatalogError::structure(
                        self.file_path,
                        context.line,
                        "<context> without a <name>",
                    ));
                }
                if let Some(catalog) = self.catalog.as_mut() {
                    catalog.contexts.push(context);
                }
            }
            b"name" if self.message.is_none() => {
                if let (Some(text), Some(context)) = (self.text.take(), self.context.as_mut()) {
                    context.name = text;
                }
            }
            b"message" => {
                let Some(pending) = self.message.take() else {
                    return Ok(());
                };
                if !pending.has_source {
                    return Err(CatalogError::structure(
                        self.file_path,
                        pending.line,
                        "<message> without a <source>",
                    ));
                }
                let message = finish_message(pending);
                if let Some(context) = self.context.as_mut() {
                    context.messages.push(message);
                }
            }
            b"source" => {
                let text = self.text.take().unwrap_or_default();
                let pending = self.pending(offset, "</source>")?;
                pending.message.source = text;
                pending.has_source = true;
            }
            b"comment" | b"extracomment" | b"translatorcomment" | b"oldsource" => {
                if let (Some(text), Some(pending)) = (self.text.take(), self.message.as_mut()) {
                    let slot = match name {
                        b"comment" => &mut pending.message.comment,
                        b"extracomment" => &mut pending.message.extra_comment,
                        b"translatorcomment" => &mut pending.message.translator_comment,
                        _ => &mut pending.message.old_source,
                    };
                    *slot = Some(text);
                }
            }
            b"translation" => {
                if let Some(pending) = self.message.as_mut()
                    && !pending.numerus
                {
                    pending.message.translation =
                        Translation::Single(self.text.take().unwrap_or_default());
                }
            }
            b"numerusform" => {
                if let (Some(text), Some(pending)) = (self.text.take(), self.message.as_mut()) {
                    pending.forms.push(text);
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Build a provenance record, resolving relative (`+N`/`-N`) lines.
    fn location(&mut self, e: &BytesStart<'_>, offset: usize) -> Result<Provenance, CatalogError> {
        let filename = match self.attribute(e, "filename", offset)? {
            Some(filename) => filename,
            None => self.last_filename.clone().unwrap_or_default(),
        };
        let raw_line = self.attribute(e, "line", offset)?;

        let line = match raw_line.as_deref() {
            None | Some("") => None,
            Some(raw) if raw.starts_with('+') || raw.starts_with('-') => {
                let delta: i64 = raw
                    .parse()
                    .map_err(|_| self.structure_error(offset, format!("invalid line \"{raw}\"")))?;
                let base = self.last_location.get(&filename).copied().unwrap_or(0);
                u32::try_from(i64::from(base) + delta).ok()
            }
            Some(raw) => Some(
                raw.parse()
                    .map_err(|_| self.structure_error(offset, format!("invalid line \"{raw}\"")))?,
            ),
        };

        if let Some(line) = line {
            self.last_location.insert(filename.clone(), line);
        }
        self.last_filename = Some(filename.clone());
        Ok(Provenance::new(filename, line))
    }

    fn pending(&mut self, offset: usize, what: &str) -> Result<&mut PendingMessage, CatalogError> {
        let line = self.lines.line(offset);
        let path = self.file_path;
        self.message
            .as_mut()
            .ok_or_else(|| CatalogError::structure(path, line, format!("{what} outside of <message>")))
    }

    fn attribute(
        &self,
        e: &BytesStart<'_>,
        name: &str,
        offset: usize,
    ) -> Result<Option<String>, CatalogError> {
        let attr = e
            .try_get_attribute(name)
            .map_err(|err| self.structure_error(offset, format!("invalid attribute: {err}")))?;
        match attr {
            Some(attr) => {
                let value = attr.unescape_value().map_err(|err| {
                    self.structure_error(offset, format!("invalid attribute \"{name}\": {err}"))
                })?;
                Ok(Some(value.into_owned()))
            }
            None => Ok(None),
        }
    }

    fn structure_error(&self, offset: usize, message: impl Into<String>) -> CatalogError {
        CatalogError::structure(self.file_path, self.lines.line(offset), message)
    }
}

fn finish_message(pending: PendingMessage) -> Message {
    let PendingMessage {
        mut message,
        numerus,
        has_translation,
        forms,
        ..
    } = pending;

    if numerus {
        message.translation = Translation::Numerus(forms);
    }
    if !has_translation {
        message.state = TranslationState::Unfinished;
    }
    message
}

/// `i18n/es_CO.ts` -> `es_CO`.
fn language_from_path(file_path: &str) -> Option<String> {
    Path::new(file_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
