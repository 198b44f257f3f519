use crate::{CliError, Result as CliErrorResult};

use std::io::{BufRead, Write};

/// y/N prompt for destructive operations, bypassed by `--yes`.
pub struct Confirmer<R, W> {
    assume_yes: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Confirmer<R, W> {
    pub fn new(assume_yes: bool, input: R, output: W) -> Self {
        Self {
            assume_yes,
            input,
            output,
        }
    }

    pub fn confirm(&mut self, prompt: &str) -> CliErrorResult<bool> {
        if self.assume_yes {
            return Ok(true);
        }

        write!(self.output, "{prompt} [y/N] ")
            .and_then(|()| self.output.flush())
            .map_err(|e| CliError::io("Failed to write prompt", e))?;

        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .map_err(|e| CliError::io("Failed to read confirmation", e))?;

        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    /// `Cancelled` unless confirmed.
    pub fn require(&mut self, prompt: &str) -> CliErrorResult<()> {
        if self.confirm(prompt)? {
            Ok(())
        } else {
            Err(CliError::cancelled())
        }
    }
}
