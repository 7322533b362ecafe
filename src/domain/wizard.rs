//! Contact entry state machine
//!
//! The wizard walks through five steps in order: name, phone, email,
//! address, tags. Each input line either fills the active step and moves
//! forward, or is the `undo` token and moves one step back.
//!
//! Transitions are pure: [`WizardState::apply`] takes the state and a line
//! and returns the next state. Prompting and echoing live in the console
//! driver (`cli::wizard`).
//!
//! # Invariants
//! - Every field of the active step and of later steps holds its placeholder.
//! - `undo` on the first step changes nothing.
//! - Undo followed by re-entering the same line restores the previous state.

use serde::{Deserialize, Serialize};

use super::contact::ContactDraft;
use super::detail::{parse_detail, Detail, DetailParseError, PLACEHOLDER};

/// Line that steps back instead of filling a field
pub const UNDO_TOKEN: &str = "undo";

/// One field-entry stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Name,
    Phone,
    Email,
    Address,
    Tags,
}

impl Step {
    /// All steps in entry order
    pub const ALL: [Step; 5] = [Step::Name, Step::Phone, Step::Email, Step::Address, Step::Tags];

    /// Position of this step, starting at 0
    pub fn index(self) -> usize {
        match self {
            Step::Name => 0,
            Step::Phone => 1,
            Step::Email => 2,
            Step::Address => 3,
            Step::Tags => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    /// Prompt shown before reading the step's line
    pub fn prompt(self) -> &'static str {
        match self {
            Step::Name => "Enter Name: ",
            Step::Phone => "Enter Phone Number (append /p to set as private): ",
            Step::Email => "Enter Email (append /p to set as private): ",
            Step::Address => "Enter Address (append /p to set as private): ",
            Step::Tags => "Enter tags (separated by commas): ",
        }
    }

    /// Short field name for diagnostics
    pub fn label(self) -> &'static str {
        match self {
            Step::Name => "name",
            Step::Phone => "phone",
            Step::Email => "email",
            Step::Address => "address",
            Step::Tags => "tags",
        }
    }

    /// Returns the detail this step fills, if it is a privacy-capable step
    fn detail_mut(self, draft: &mut ContactDraft) -> Option<&mut Detail> {
        match self {
            Step::Phone => Some(&mut draft.phone),
            Step::Email => Some(&mut draft.email),
            Step::Address => Some(&mut draft.address),
            Step::Name | Step::Tags => None,
        }
    }

    /// Resets this step's fields to their placeholders.
    ///
    /// Tags are never cleared: they are the last step, and undo is ignored
    /// once the wizard is complete.
    fn clear(self, draft: &mut ContactDraft) {
        if let Some(detail) = self.detail_mut(draft) {
            *detail = Detail::default();
        } else if self == Step::Name {
            draft.name = PLACEHOLDER.to_string();
        }
    }
}

/// What to do with a phone/email/address line that has no value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedDetailPolicy {
    /// Store the raw line as a public value and move on
    #[default]
    AcceptAsPublic,
    /// Leave the draft untouched and ask for the same step again
    Reprompt,
}

/// A line as the wizard sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    Undo,
    Value(&'a str),
}

impl<'a> Entry<'a> {
    pub fn classify(line: &'a str) -> Self {
        if line.trim() == UNDO_TOKEN {
            Entry::Undo
        } else {
            Entry::Value(line)
        }
    }
}

/// Result of applying one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The step was filled and the wizard moved forward
    Advanced,
    /// The line had no value; it was stored verbatim as public and the wizard moved forward
    AdvancedMalformed(DetailParseError),
    /// The previous step was cleared and is active again
    Undone,
    /// Nothing changed (undo on the first step, or the wizard is complete)
    Ignored,
    /// The line had no value and the same step must be entered again
    Rejected(DetailParseError),
}

/// Position in the wizard plus the draft being filled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    position: usize,
    draft: ContactDraft,
}

impl WizardState {
    /// Starts at the first step with the given draft
    pub fn new(draft: ContactDraft) -> Self {
        Self { position: 0, draft }
    }

    /// The active step, or `None` once every step is done
    pub fn current_step(&self) -> Option<Step> {
        Step::from_index(self.position)
    }

    /// Index of the active step; equals the number of steps when complete
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_complete(&self) -> bool {
        self.position >= Step::ALL.len()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn into_draft(self) -> ContactDraft {
        self.draft
    }

    /// Applies one input line
    pub fn apply(self, line: &str, policy: MalformedDetailPolicy) -> (Self, Outcome) {
        let Some(step) = self.current_step() else {
            return (self, Outcome::Ignored);
        };

        match Entry::classify(line) {
            Entry::Undo => self.undo(),
            Entry::Value(value) => self.fill(step, value, policy),
        }
    }

    /// Steps back one field, clearing the field being returned to
    fn undo(mut self) -> (Self, Outcome) {
        let Some(previous) = self.position.checked_sub(1).and_then(Step::from_index) else {
            return (self, Outcome::Ignored);
        };

        previous.clear(&mut self.draft);
        self.position = previous.index();
        (self, Outcome::Undone)
    }

    fn fill(mut self, step: Step, value: &str, policy: MalformedDetailPolicy) -> (Self, Outcome) {
        let mut outcome = Outcome::Advanced;

        match step {
            Step::Name => self.draft.name = value.to_string(),
            Step::Tags => self.draft.tags.add_all(value),
            Step::Phone | Step::Email | Step::Address => {
                let detail = match parse_detail(value) {
                    Ok(detail) => detail,
                    Err(err) => match policy {
                        MalformedDetailPolicy::Reprompt => return (self, Outcome::Rejected(err)),
                        MalformedDetailPolicy::AcceptAsPublic => {
                            outcome = Outcome::AdvancedMalformed(err);
                            Detail::public(value)
                        }
                    },
                };
                if let Some(slot) = step.detail_mut(&mut self.draft) {
                    *slot = detail;
                }
            }
        }

        self.position += 1;
        (self, outcome)
    }

    /// Applies lines in order until they run out or the wizard completes
    pub fn replay<'a, I>(mut self, lines: I, policy: MalformedDetailPolicy) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            if self.is_complete() {
                break;
            }
            self = self.apply(line, policy).0;
        }
        self
    }
}
