//! Input handling: line sources and menu selector parsing.

use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock};

use anyhow::Context;

/// Trait for input sources
pub trait InputSource {
    /// Next line of input without its line ending, or `None` once the
    /// source is exhausted.
    fn read_line(&mut self) -> anyhow::Result<Option<String>>;
}

/// Console input source implementation over any buffered reader.
pub struct ConsoleInput<R: BufRead> {
    reader: R,
}

impl ConsoleInput<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for ConsoleInput<R> {
    /// Bytes that are not valid UTF-8 are replaced, so garbage input
    /// reaches the menus as an ordinary invalid choice.
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Replays a fixed sequence of lines, then reports end of input.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    StartGame,
    LoadGame,
    Exit,
}

impl MenuChoice {
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(MenuChoice::StartGame),
            2 => Some(MenuChoice::LoadGame),
            3 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn parse(line: &str) -> Option<Self> {
        parse_selector(line).and_then(Self::from_selector)
    }
}

/// Read the integer selector at the start of a line.
pub fn parse_selector(line: &str) -> Option<i64> {
    line.split_whitespace().next()?.parse().ok()
}

/// First whitespace-delimited word of a line, if any.
pub fn first_word(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}
