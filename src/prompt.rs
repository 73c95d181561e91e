//! Interactive confirmation collaborator.
//!
//! Reconciliation asks one yes/no question per differing registry, strictly
//! one at a time. The trait seam keeps the workflow testable without a
//! terminal; [`ScriptedConfirm`] replays canned answers.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;

pub trait Confirm {
    /// Present `question` and return the operator's answer, falling back to
    /// `default` on empty input. Blocks until input arrives.
    fn ask(&mut self, question: &str, default: &str) -> Result<String>;
}

/// Prompt on stdout, answer from stdin.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl Confirm for StdinPrompt {
    fn ask(&mut self, question: &str, default: &str) -> Result<String> {
        print!("{} ({}) ", question.bold(), default.dimmed());
        io::stdout().flush().context("Failed to flush prompt")?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .context("Failed to read confirmation input")?;

        let answer = answer.trim();
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer.to_string())
        }
    }
}

/// Scripted answers for tests; exhausting the script falls back to the
/// default answer.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<String>,
    asked: usize,
}

impl ScriptedConfirm {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: 0,
        }
    }

    /// How many questions were asked.
    pub fn asked(&self) -> usize {
        self.asked
    }
}

impl Confirm for ScriptedConfirm {
    fn ask(&mut self, _question: &str, default: &str) -> Result<String> {
        self.asked += 1;
        Ok(self
            .answers
            .pop_front()
            .unwrap_or_else(|| default.to_string()))
    }
}
