//! Text renderer for menus, stats and narration.

use std::io::{self, Stderr, Stdout, Write};

use combat::{CombatantKind, CombatantStats};
use crossterm::style::Stylize;

use crate::battle::BattleState;

/// Trait for rendering the game state
pub trait Renderer {
    /// Top-level menu followed by its prompt.
    fn main_menu(&mut self) -> anyhow::Result<()>;

    /// Battle action menu.
    fn battle_menu(&mut self) -> anyhow::Result<()>;

    /// Both combatants' stats, player first.
    fn stats(
        &mut self,
        player: CombatantStats<'_>,
        enemy: CombatantStats<'_>,
    ) -> anyhow::Result<()>;

    /// A prompt without a trailing newline.
    fn prompt(&mut self, text: &str) -> anyhow::Result<()>;

    /// Ordinary narration line.
    fn narrate(&mut self, line: &str) -> anyhow::Result<()>;

    /// Closing line of a finished battle.
    fn outcome(&mut self, state: BattleState) -> anyhow::Result<()>;

    /// Recoverable error, shown on the error stream.
    fn error(&mut self, line: &str) -> anyhow::Result<()>;
}

/// Writes narration to `out` and errors to `err`.
pub struct TextRenderer<O: Write, E: Write> {
    out: O,
    err: E,
    color: bool,
}

impl TextRenderer<Stdout, Stderr> {
    pub fn console(color: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), color)
    }
}

impl<O: Write, E: Write> TextRenderer<O, E> {
    pub fn new(out: O, err: E, color: bool) -> Self {
        Self { out, err, color }
    }

    /// Consume the renderer, returning its writers.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn stats_line(&self, stats: CombatantStats<'_>) -> String {
        let line = stats.to_string();
        if !self.color {
            return line;
        }
        match stats.kind {
            CombatantKind::Player => line.cyan().to_string(),
            CombatantKind::Enemy => line.red().to_string(),
        }
    }
}

impl<O: Write, E: Write> Renderer for TextRenderer<O, E> {
    fn main_menu(&mut self) -> anyhow::Result<()> {
        write!(
            self.out,
            "1. Start Game\n2. Load Game\n3. Exit\nChoose an option: "
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn battle_menu(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.out,
            "\nChoose an action:\n1. Attack\n2. Collect Treasure\n3. Save and Exit"
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn stats(
        &mut self,
        player: CombatantStats<'_>,
        enemy: CombatantStats<'_>,
    ) -> anyhow::Result<()> {
        let player_line = self.stats_line(player);
        let enemy_line = self.stats_line(enemy);
        writeln!(self.out, "{player_line}")?;
        writeln!(self.out, "{enemy_line}")?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    fn narrate(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn outcome(&mut self, state: BattleState) -> anyhow::Result<()> {
        let Some(message) = state.final_message() else {
            return Ok(());
        };
        if self.color {
            let styled = match state {
                BattleState::PlayerVictory => message.green().bold(),
                BattleState::PlayerDefeated => message.red().bold(),
                _ => message.yellow(),
            };
            writeln!(self.out, "{styled}")?;
        } else {
            writeln!(self.out, "{message}")?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn error(&mut self, line: &str) -> anyhow::Result<()> {
        if self.color {
            writeln!(self.err, "{}", line.red())?;
        } else {
            writeln!(self.err, "{line}")?;
        }
        self.err.flush()?;
        Ok(())
    }
}
