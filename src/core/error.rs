use thiserror::Error;

/// Error raised while reading or parsing a catalog file.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The XML itself is malformed.
    #[error("{path}:{line}: invalid XML: {source}")]
    Xml {
        path: String,
        line: usize,
        #[source]
        source: quick_xml::Error,
    },
    /// Well-formed XML that is not a valid translation table.
    #[error("{path}:{line}: {message}")]
    Structure {
        path: String,
        line: usize,
        message: String,
    },
    /// Neither a `language` attribute nor a usable file name.
    #[error("{path}: catalog declares no language")]
    MissingLanguage { path: String },
}

impl CatalogError {
    pub(crate) fn structure(path: &str, line: usize, message: impl Into<String>) -> Self {
        CatalogError::Structure {
            path: path.to_string(),
            line,
            message: message.into(),
        }
    }
}
