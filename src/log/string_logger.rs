// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::common::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct LoggerInner {
    lines: Vec<String>,
    warn: bool,
}

/// Thread-safe string logger shared between a caller and its invocations.
#[derive(Clone, Default)]
pub struct StringLogger {
    debug: bool,
    inner: Arc<Mutex<LoggerInner>>,
}

impl StringLogger {
    /// Trace the outcome of a remote call and pass the result through.
    pub fn call<T>(&self, line: String, result: Result<T, Error>) -> Result<T, Error> {
        match &result {
            Ok(_) => self.trace(format!("{line} succeeded")),
            Err(e) => self.warn(format!("{line} failed\n  {e}")),
        }
        result
    }

    /// Whether the log contains any warnings.
    pub fn contains_warnings(&self) -> bool {
        self.inner
            .lock()
            .ok()
            .map(|inner| inner.warn)
            .unwrap_or(false)
    }

    /// Returns a copy of the lines logged so far.
    pub fn lines(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|inner| inner.lines.clone())
            .unwrap_or_default()
    }

    /// Create a new string logger which echoes lines to stdout if `debug`.
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            inner: Arc::new(Mutex::new(Default::default())),
        }
    }

    /// Returns the same log, echoing subsequent lines to stdout if `debug`.
    pub fn with_debug(self, debug: bool) -> Self {
        Self { debug, ..self }
    }

    /// Add a trace line to this logger.
    pub fn trace(&self, line: String) {
        self.push(line, false);
    }

    /// Add a warning or error line to this logger.
    pub fn warn(&self, line: String) {
        self.push(line, true);
    }

    fn push(&self, line: String, warn: bool) {
        if line.is_empty() {
            return;
        }
        if self.debug {
            println!("{line}");
        }
        if let Ok(mut inner) = self.inner.lock() {
            inner.lines.push(line);
            inner.warn |= warn;
        }
    }
}

impl Display for StringLogger {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.inner.lock() {
            Ok(inner) => f.write_str(&inner.lines.join("\n")),
            Err(_) => Ok(()),
        }
    }
}
