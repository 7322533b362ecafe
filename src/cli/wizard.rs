//! Console driver for the contact entry wizard
//!
//! Prompts for each step, reads one line, echoes it, and feeds it to
//! [`WizardState`]. All field logic stays in the state machine; this module
//! only talks to the terminal.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use super::output::Output;
use crate::domain::{ContactDraft, MalformedDetailPolicy, Outcome, Step, WizardState};

/// Shown once before the first prompt
pub const UNDO_NOTE: &str = "NOTE: Enter 'undo' at any time to undo the last entry";

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Input ended before the {} was entered", .0.label())]
    InputClosed(Step),

    #[error("Console I/O failed")]
    Io(#[from] io::Error),
}

/// Interactive contact entry over a line reader and a writer
pub struct EntryWizard<'a, R, W> {
    input: R,
    output: W,
    policy: MalformedDetailPolicy,
    echo: bool,
    log: Option<&'a Output>,
}

impl<'a, R: BufRead, W: Write> EntryWizard<'a, R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            policy: MalformedDetailPolicy::default(),
            echo: true,
            log: None,
        }
    }

    /// Sets how phone/email/address lines without a value are handled
    pub fn policy(mut self, policy: MalformedDetailPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Turns echoing of entered lines on or off
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Sends diagnostics to the given output's verbose channel
    pub fn log_to(mut self, output: &'a Output) -> Self {
        self.log = Some(output);
        self
    }

    /// Runs every step on `draft` and returns it once complete
    pub fn run(&mut self, draft: ContactDraft) -> Result<ContactDraft, WizardError> {
        writeln!(self.output, "{}", UNDO_NOTE)?;

        let mut state = WizardState::new(draft);

        while let Some(step) = state.current_step() {
            write!(self.output, "{}", step.prompt())?;
            self.output.flush()?;

            let line = self.read_line()?.ok_or(WizardError::InputClosed(step))?;
            if self.echo {
                writeln!(self.output, "[Entered: {}]", line)?;
            }

            let (next, outcome) = state.apply(&line, self.policy);
            state = next;
            self.present(step, &line, &outcome)?;
        }

        Ok(state.into_draft())
    }

    fn present(&mut self, step: Step, line: &str, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Rejected(err) => {
                writeln!(self.output, "Invalid entry: {}", err)?;
                self.log(step, "entry rejected, prompting again");
            }
            Outcome::AdvancedMalformed(err) => {
                writeln!(self.output, "Note: {}; stored \"{}\" as entered", err, line)?;
                self.log(step, "missing value accepted as public");
            }
            Outcome::Undone => self.log(step, "undo"),
            Outcome::Ignored => self.log(step, "nothing to undo"),
            Outcome::Advanced => {}
        }
        Ok(())
    }

    fn log(&self, step: Step, message: &str) {
        if let Some(output) = self.log {
            output.verbose_ctx(&format!("wizard:{}", step.label()), message);
        }
    }

    /// Reads one line without its terminator; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
