use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for strapgen-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the raw schema content and its filename so parse errors can point
/// at the offending location.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a serde_json error.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = byte_offset(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from(offset..offset));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }
}

/// Convert a 1-based line and column (as reported by serde_json) into a byte offset.
///
/// serde_json reports line 0 when the error has no position (e.g. I/O errors).
fn byte_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start = if line == 1 {
        0
    } else {
        src.match_indices('\n').nth(line - 2).map(|(i, _)| i + 1)?
    };

    let offset = line_start + column.saturating_sub(1);
    Some(offset.min(src.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(strapgen::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse schema")]
    #[diagnostic(
        code(strapgen::parse_error),
        help("schema files must be valid JSON with an \"attributes\" object")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("no {category} directory found at '{path}'")]
    #[diagnostic(
        code(strapgen::missing_directory),
        help("pass the root of a Strapi project, e.g. `strapgen ./backend`")
    )]
    MissingDirectory { category: String, path: PathBuf },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a missing directory error
    pub fn missing_directory(category: impl Into<String>, path: impl Into<PathBuf>) -> Box<Self> {
        Box::new(Error::MissingDirectory {
            category: category.into(),
            path: path.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_offset_first_line() {
        assert_eq!(byte_offset("{ oops }", 1, 3), Some(2));
    }

    #[test]
    fn test_byte_offset_later_line() {
        let src = "{\n  \"a\": 1,\n  oops\n}";
        // line 3, column 3 points at the 'o' of oops
        let offset = byte_offset(src, 3, 3).unwrap();
        assert_eq!(&src[offset..offset + 4], "oops");
    }

    #[test]
    fn test_byte_offset_without_position() {
        assert_eq!(byte_offset("{}", 0, 0), None);
    }

    #[test]
    fn test_parse_error_has_span() {
        let ctx = SourceContext::new("{ \"attributes\": }", "schema.json");
        let source = serde_json::from_str::<serde_json::Value>(ctx.src()).unwrap_err();

        match *ctx.parse_error(source) {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
