//! Scripted console that replays canned answers and records the transcript.

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use super::ConsoleLine;
use crate::ports::console::Console;

/// Console fed from a fixed list of answers.
///
/// Once the answers run out, prompts report end of input.
pub struct ScriptedConsole {
    answers: Mutex<VecDeque<String>>,
    transcript: Mutex<Vec<ConsoleLine>>,
}

impl ScriptedConsole {
    /// Creates a console that answers prompts with `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            transcript: Mutex::new(Vec::new()),
        }
    }

    /// Returns everything printed or prompted so far.
    ///
    /// # Panics
    ///
    /// Panics if the transcript lock is poisoned.
    #[must_use]
    pub fn transcript(&self) -> Vec<ConsoleLine> {
        self.transcript.lock().expect("transcript lock poisoned").clone()
    }

    /// Returns only the `print_line` output.
    #[must_use]
    pub fn output(&self) -> Vec<String> {
        self.transcript()
            .into_iter()
            .filter_map(|line| match line {
                ConsoleLine::Output(text) => Some(text),
                ConsoleLine::Prompt(_) => None,
            })
            .collect()
    }

    /// Returns how many prompts have been shown.
    #[must_use]
    pub fn prompt_count(&self) -> usize {
        self.transcript().iter().filter(|line| matches!(line, ConsoleLine::Prompt(_))).count()
    }
}

impl Console for ScriptedConsole {
    fn print_line(&self, line: &str) {
        self.transcript
            .lock()
            .expect("transcript lock poisoned")
            .push(ConsoleLine::Output(line.to_string()));
    }

    fn prompt(&self, prompt: &str) -> io::Result<Option<String>> {
        self.transcript
            .lock()
            .expect("transcript lock poisoned")
            .push(ConsoleLine::Prompt(prompt.to_string()));
        Ok(self.answers.lock().expect("answers lock poisoned").pop_front())
    }
}
