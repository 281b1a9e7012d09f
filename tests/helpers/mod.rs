//! Shared builders for scripted sessions.

#![allow(dead_code)]

use mystic_quest::input::ScriptedInput;
use mystic_quest::renderer::TextRenderer;
use mystic_quest::{GameLoop, SaveSystem, SessionEnd};
use tempfile::TempDir;

pub type CaptureRenderer = TextRenderer<Vec<u8>, Vec<u8>>;

/// Everything a finished session printed.
pub struct SessionOutput {
    pub end: SessionEnd,
    pub stdout: String,
    pub stderr: String,
}

/// Save location inside a fresh temporary directory.
pub struct TestSaves {
    pub dir: TempDir,
    pub saves: SaveSystem,
}

impl TestSaves {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let saves = SaveSystem::new(dir.path().join("game_state.txt"));
        Self { dir, saves }
    }

    pub fn contents(&self) -> String {
        std::fs::read_to_string(self.saves.path()).expect("read save file")
    }

    pub fn write(&self, contents: &str) {
        std::fs::write(self.saves.path(), contents).expect("write save file");
    }
}

/// Play a whole session from the given input lines with plain output.
pub fn run_session(saves: &SaveSystem, lines: &[&str]) -> SessionOutput {
    let input = ScriptedInput::new(lines.iter().copied());
    let renderer = TextRenderer::new(Vec::new(), Vec::new(), false);
    let mut game = GameLoop::new(input, renderer, saves.clone());

    let end = game.run().expect("session runs");
    let (out, err) = game.into_renderer().into_inner();
    SessionOutput {
        end,
        stdout: String::from_utf8(out).expect("utf8 stdout"),
        stderr: String::from_utf8(err).expect("utf8 stderr"),
    }
}
