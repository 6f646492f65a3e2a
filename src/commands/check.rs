use console::style;

use super::Command;
use crate::error::Result;
use crate::verbosity::Verbosity;

// Styled output prefix (Classic ASCII)
const INFO_PREFIX: &str = "[*]";

pub struct Check {
    verbosity: Verbosity,
}

impl Check {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl Command for Check {
    fn execute(&self) -> Result<()> {
        let threshold = self.verbosity.resolve();

        println!(
            "{} Threshold: {} (rank {})",
            style(INFO_PREFIX).blue().bold(),
            style(threshold.as_str()).cyan(),
            threshold.rank()
        );

        Ok(())
    }
}
