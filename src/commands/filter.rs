use std::io::{self, BufRead};
use std::sync::Arc;

use super::Command;
use crate::error::Result;
use crate::logger::LeveledLogger;
use crate::severity::Severity;
use crate::sink::ConsoleSink;
use crate::verbosity::Verbosity;

pub struct Filter {
    verbosity: Verbosity,
}

impl Filter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Gates each input line through `logger`.
    ///
    /// A line may start with a case-insensitive `error:`, `warn:`, `info:`
    /// or `debug:` tag selecting its severity; the remainder is the
    /// message. Lines without a recognized tag are forwarded whole as info
    /// messages rather than rejected, matching the soft-degradation policy
    /// of the verbosity configuration.
    pub fn filter_lines<R: BufRead>(&self, input: R, logger: &LeveledLogger) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            match split_tag(&line) {
                Some((Severity::Error, message)) => logger.error(message),
                Some((Severity::Warn, message)) => logger.warn(message),
                Some((Severity::Info, message)) => logger.info(message),
                Some((Severity::Debug, message)) => logger.debug(message),
                None => logger.info(&line),
            }
        }
        Ok(())
    }
}

impl Command for Filter {
    fn execute(&self) -> Result<()> {
        let logger = LeveledLogger::new(&self.verbosity, Arc::new(ConsoleSink));
        let stdin = io::stdin();
        self.filter_lines(stdin.lock(), &logger)
    }
}

/// Splits a leading `level:` tag off a line.
fn split_tag(line: &str) -> Option<(Severity, &str)> {
    let (tag, rest) = line.split_once(':')?;
    let severity = Severity::from_name(tag.trim())?;
    Some((severity, rest.trim_start()))
}
