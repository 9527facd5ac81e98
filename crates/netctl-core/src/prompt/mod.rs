//! Interactive yes/no confirmation.

use std::io::{BufRead, Write};

/// Yes/no oracle consulted before destructive operations.
pub trait ConfirmationPrompt {
    /// Show `message` and return whether the operator consented.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Check if user confirmation input indicates acceptance.
/// The whole line, minus surrounding whitespace, must be exactly "y" or "Y".
pub fn is_confirmation_accepted(input: &str) -> bool {
    matches!(input.trim(), "y" | "Y")
}

/// Prompt that writes `<message> [y/N] ` to `output` and reads one line
/// from `input`.
pub struct StreamPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> ConfirmationPrompt for StreamPrompt<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        let written = write!(self.output, "{} [y/N] ", message);
        if let Err(e) = written.and_then(|_| self.output.flush()) {
            tracing::warn!(event = "core.prompt.write_failed", error = %e);
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => is_confirmation_accepted(&answer),
            Err(e) => {
                tracing::warn!(event = "core.prompt.read_failed", error = %e);
                false
            }
        }
    }
}

/// Declines every confirmation without reading input.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeNo;

impl ConfirmationPrompt for AssumeNo {
    fn confirm(&mut self, message: &str) -> bool {
        tracing::info!(
            event = "core.prompt.declined_unattended",
            message = message
        );
        false
    }
}

impl<P: ConfirmationPrompt + ?Sized> ConfirmationPrompt for &mut P {
    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }
}
