use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Unsupported,
    Io,
    Parse,
    MissingId,
    // Part of the documented taxonomy; no extraction path raises it yet.
    BlankId,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    path: Option<PathBuf>,
    record: Option<u64>,
    hint: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            path: None,
            record: None,
            hint: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// 1-based index of the record being processed when the pass failed.
    pub fn record(&self) -> Option<u64> {
        self.record
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_record(mut self, record: u64) -> Self {
        self.record = Some(record);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        if let Some(record) = self.record {
            write!(f, " (record: {record})")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use std::error::Error as StdError;

    #[test]
    fn display_renders_kind_and_context() {
        let err = Error::new(ErrorKind::MissingId)
            .with_message("record has no id field")
            .with_path("/tmp/records.json")
            .with_record(3);
        let rendered = err.to_string();
        assert!(rendered.starts_with("MissingId: record has no id field"));
        assert!(rendered.contains("(path: /tmp/records.json)"));
        assert!(rendered.contains("(record: 3)"));
    }

    #[test]
    fn source_chain_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::new(ErrorKind::Io)
            .with_message("failed to read record file")
            .with_source(io);
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.source().is_some());
    }

    #[test]
    fn hint_is_rendered_after_context() {
        let err = Error::new(ErrorKind::Parse)
            .with_message("invalid json input")
            .with_hint("parse category: syntax");
        let rendered = err.to_string();
        assert!(rendered.contains("(hint: parse category: syntax)"));
        assert_eq!(err.hint(), Some("parse category: syntax"));
    }
}
