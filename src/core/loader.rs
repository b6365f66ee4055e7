// Record loading over a whole-file buffer with a single-document cursor.
// first() rebuilds parse state from scratch; next() never re-parses.
use std::fs;
use std::path::{Path, PathBuf};

use simd_json::OwnedValue;
use simd_json::prelude::*;
use tracing::{error, warn};

use crate::core::error::{Error, ErrorKind};
use crate::json::parse;

const MAX_SNIPPET_BYTES: usize = 64;

/// One logical record: the extracted identifier plus the raw bytes backing it.
#[derive(Debug, PartialEq)]
pub struct Record<'a> {
    id: String,
    raw: &'a [u8],
}

impl<'a> Record<'a> {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The entire original file contents, not a per-record slice.
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }
}

#[derive(Debug)]
struct ParseState {
    root: OwnedValue,
    consumed: bool,
}

/// Pull-based loader over a single JSON record file.
///
/// Not safe for concurrent use; callers validating several files in parallel
/// open one loader per file.
#[derive(Debug)]
pub struct RecordLoader {
    path: PathBuf,
    buffer: Vec<u8>,
    parsed: Option<ParseState>,
}

impl RecordLoader {
    /// Reads `path` fully into memory and binds a loader to that buffer.
    ///
    /// Fails with [`ErrorKind::Unsupported`] when the CPU lacks the SIMD
    /// features the parser's fast path relies on, and with [`ErrorKind::Io`]
    /// when the file cannot be read. No parse state is established yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !parse::runtime_supported() {
            return Err(Error::new(ErrorKind::Unsupported)
                .with_message("cpu lacks the simd features required by the json parser"));
        }
        let buffer = fs::read(path).map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to read record file")
                .with_path(path)
                .with_source(err)
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            buffer,
            parsed: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses the buffer and yields the first record of a fresh pass.
    ///
    /// Prior parse state is discarded, so calling `first` again rewinds the
    /// pass and reproduces the same record. An empty or whitespace-only
    /// buffer is end-of-stream without touching the parser.
    pub fn first(&mut self) -> Result<Option<Record<'_>>, Error> {
        self.parsed = None;
        if self.buffer.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(None);
        }
        let mut scratch = self.buffer.clone();
        let root = parse::parse_document(&mut scratch).map_err(|err| {
            let context = parse::snippet(&self.buffer, MAX_SNIPPET_BYTES);
            Error::new(ErrorKind::Parse)
                .with_message("invalid json input")
                .with_path(&self.path)
                .with_hint(parse::hint_for_error(&err, &context))
                .with_source(err)
        })?;
        self.parsed = Some(ParseState {
            root,
            consumed: false,
        });
        self.next()
    }

    /// Yields the next record of the current pass, or `Ok(None)` at
    /// end-of-stream.
    ///
    /// The file holds at most one top-level document, so every call after the
    /// root is consumed returns end-of-stream. Without an established pass
    /// (no `first` yet, or a failed one) this is end-of-stream as well.
    pub fn next(&mut self) -> Result<Option<Record<'_>>, Error> {
        let Some(state) = self.parsed.as_mut() else {
            return Ok(None);
        };
        if state.consumed {
            return Ok(None);
        }
        state.consumed = true;
        let id = record_id(&state.root, &self.path)?;
        Ok(Some(Record {
            id,
            raw: &self.buffer,
        }))
    }

    /// Scans every record purely to verify the file, discarding the records.
    ///
    /// Empty input is valid and logged as a warning. The first structural
    /// failure aborts the pass and is logged with the 1-based index of the
    /// record being processed; no partial tolerance, no retry.
    pub fn validate(&mut self) -> Result<(), Error> {
        let mut index = 1u64;
        match self.first().map(|record| record.is_some()) {
            Ok(true) => {}
            Ok(false) => {
                warn!(
                    path = %self.path.display(),
                    "no records found, treating empty input as valid"
                );
                return Ok(());
            }
            Err(err) => return Err(self.fail_validation(err, index)),
        }
        loop {
            index += 1;
            match self.next().map(|record| record.is_some()) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => return Err(self.fail_validation(err, index)),
            }
        }
        Ok(())
    }

    /// Releases the buffer and parse state ahead of drop, for callers that
    /// care about resource pressure. Afterwards the loader behaves as if it
    /// had been opened on an empty file; dropping it remains the ordinary
    /// teardown path.
    pub fn close(&mut self) {
        self.buffer = Vec::new();
        self.parsed = None;
    }

    fn fail_validation(&self, err: Error, index: u64) -> Error {
        let err = err.with_record(index);
        error!(
            path = %self.path.display(),
            record = index,
            %err,
            "validation failed"
        );
        err
    }
}

fn record_id(root: &OwnedValue, path: &Path) -> Result<String, Error> {
    let Some(doc) = root.as_object() else {
        return Err(Error::new(ErrorKind::Parse)
            .with_message("top-level value is not an object")
            .with_path(path));
    };
    let Some(value) = doc.get("id") else {
        return Err(Error::new(ErrorKind::MissingId)
            .with_message("record has no id field")
            .with_path(path));
    };
    match value.as_str() {
        Some(id) => Ok(id.to_string()),
        None => Err(Error::new(ErrorKind::Parse)
            .with_message(format!(
                "id field is not a string (found {:?})",
                value.value_type()
            ))
            .with_path(path)),
    }
}
