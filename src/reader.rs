//! Line-by-line parsing of log input.

use crate::error::{Error, Result};
use crate::parser::{LineParser, Strategy};
use crate::record::LogRecord;
use std::io::{BufRead, BufReader, Read};

/// A reader that feeds an input source through a [`LineParser`] one line at a time.
///
/// The reader implements the Iterator trait. A line the parser cannot match is
/// reported as [`Error::UnparseableLine`] so the caller can choose to skip it,
/// log it or stop.
#[derive(Debug)]
pub struct Reader<R: Read, P: LineParser = Strategy> {
    /// The underlying buffered reader.
    reader: BufReader<R>,
    /// The parser each line is handed to.
    parser: P,
    /// Number of the last line read, starting at 1.
    line_number: usize,
}

impl<R: Read> Reader<R> {
    /// Create a new reader using the default [`Strategy`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use rsalp::Reader;
    /// use std::io::Cursor;
    ///
    /// let log_data = r#"127.0.0.1 - - [08/Nov/2013:13:39:18 +0000] "GET /api/foo HTTP/1.1" 200 612 "-" "curl/7.64.1""#;
    ///
    /// let mut reader = Reader::new(Cursor::new(log_data));
    /// let record = reader.read().unwrap()?;
    /// assert_eq!(record.status(), "200");
    /// # Ok::<(), rsalp::Error>(())
    /// ```
    pub fn new(input: R) -> Self {
        Self::with_parser(input, Strategy::default())
    }
}

impl<R: Read, P: LineParser> Reader<R, P> {
    /// Create a new reader with a specific parser.
    ///
    /// # Arguments
    ///
    /// * `input` - The input source (file, stdin, etc.)
    /// * `parser` - The parser used for every line, e.g. [`Strategy::Token`]
    pub fn with_parser(input: R, parser: P) -> Self {
        Self {
            reader: BufReader::new(input),
            parser,
            line_number: 0,
        }
    }

    /// Get a reference to the underlying parser.
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Number of lines consumed so far, blank lines included.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next record from the input.
    ///
    /// Blank lines are skipped.
    ///
    /// # Returns
    ///
    /// An `Option<Result<LogRecord>>` where:
    /// - `None` indicates end of input
    /// - `Some(Ok(record))` indicates a successfully parsed line
    /// - `Some(Err(error))` indicates an unparseable line or an I/O error
    pub fn read(&mut self) -> Option<Result<LogRecord>> {
        let mut line = String::new();

        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;

                    if line.ends_with('\n') {
                        line.pop();
                        if line.ends_with('\r') {
                            line.pop();
                        }
                    }

                    if line.trim().is_empty() {
                        continue;
                    }

                    return Some(
                        self.parser
                            .parse_line(&line)
                            .ok_or_else(|| Error::unparseable_line(self.line_number, line)),
                    );
                }
                Err(e) => return Some(Err(Error::Io { source: e })),
            }
        }
    }

    /// Collect all records into a vector, stopping at the first error.
    pub fn collect_all(mut self) -> Result<Vec<LogRecord>> {
        let mut records = Vec::new();

        while let Some(result) = self.read() {
            records.push(result?);
        }

        Ok(records)
    }

    /// Collect all parseable records, skipping lines the parser rejects.
    ///
    /// I/O errors still abort.
    ///
    /// # Returns
    ///
    /// The parsed records and the number of skipped lines.
    pub fn collect_lenient(mut self) -> Result<(Vec<LogRecord>, usize)> {
        let mut records = Vec::new();
        let mut skipped = 0;

        while let Some(result) = self.read() {
            match result {
                Ok(record) => records.push(record),
                Err(Error::UnparseableLine { line_number, line }) => {
                    tracing::debug!(line_number, line = line.as_str(), "skipping unparseable line");
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok((records, skipped))
    }

    /// Process records with a closure.
    ///
    /// Records are handed over one by one without being collected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rsalp::{Reader, Strategy};
    /// use std::io::Cursor;
    ///
    /// let log_data = r#"127.0.0.1 - - [08/Nov/2013:13:39:18 +0000] "GET /api/foo HTTP/1.1" 200 612 "-" "curl/7.64.1""#;
    ///
    /// let mut reader = Reader::with_parser(Cursor::new(log_data), Strategy::Token);
    ///
    /// reader.process_records(|record| -> Result<(), Box<dyn std::error::Error>> {
    ///     println!("IP: {}", record.ip());
    ///     Ok(())
    /// })?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn process_records<F, E>(&mut self, mut f: F) -> std::result::Result<(), E>
    where
        F: FnMut(&LogRecord) -> std::result::Result<(), E>,
        E: From<Error>,
    {
        while let Some(result) = self.read() {
            let record = result?;
            f(&record)?;
        }
        Ok(())
    }
}

impl<R: Read, P: LineParser> Iterator for Reader<R, P> {
    type Item = Result<LogRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read()
    }
}
