//! A [`Console`] driven by a fixed script.
//!
//! Every line the code under test reads comes from the script, in order;
//! every line it prints is recorded with its tone. Once the script runs
//! out, reads report end of input, the same as a closed stdin.

use std::collections::VecDeque;

use crate::error::Result;
use crate::port::outbound::console::{Console, Tone};

#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<(Tone, String)>,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Everything printed so far, in order.
    pub fn output(&self) -> &[(Tone, String)] {
        &self.output
    }

    /// The printed lines as plain text.
    pub fn transcript(&self) -> Vec<&str> {
        self.output.iter().map(|(_, line)| line.as_str()).collect()
    }

    /// Lines printed in `tone`, in order.
    pub fn lines_in(&self, tone: Tone) -> Vec<&str> {
        self.output
            .iter()
            .filter(|(t, _)| *t == tone)
            .map(|(_, line)| line.as_str())
            .collect()
    }

    /// Whether exactly `line` was printed.
    pub fn printed(&self, line: &str) -> bool {
        self.output.iter().any(|(_, l)| l == line)
    }

    /// Whether any printed line contains `fragment`.
    pub fn printed_containing(&self, fragment: &str) -> bool {
        self.output.iter().any(|(_, l)| l.contains(fragment))
    }

    /// Whether every scripted line has been read.
    pub fn is_drained(&self) -> bool {
        self.input.is_empty()
    }

    /// How many times the screen was cleared.
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Console for ScriptedConsole {
    fn show(&mut self, tone: Tone, text: &str) -> Result<()> {
        self.output.push((tone, text.to_string()));
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }
}
