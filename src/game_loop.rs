//! Interactive session: the top menu and the battle driver.

use combat::Combatant;
use error::{GameError, handle_error};
use save::SaveSystem;

use crate::battle::{Battle, BattleAction, BattleState};
use crate::input::{InputSource, MenuChoice, first_word};
use crate::renderer::Renderer;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player picked Exit from the top menu.
    Exited,
    /// Input ran out before the player picked Exit.
    InputClosed,
}

/// 主游戏循环
pub struct GameLoop<I: InputSource, R: Renderer> {
    input: I,
    renderer: R,
    saves: SaveSystem,
}

impl<I: InputSource, R: Renderer> GameLoop<I, R> {
    pub fn new(input: I, renderer: R, saves: SaveSystem) -> Self {
        Self {
            input,
            renderer,
            saves,
        }
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Show the top menu until the player exits or input runs out.
    pub fn run(&mut self) -> anyhow::Result<SessionEnd> {
        tracing::info!(save_file = %self.saves.path().display(), "session started");
        loop {
            self.renderer.main_menu()?;
            let Some(line) = self.input.read_line()? else {
                tracing::info!("input closed at main menu");
                return Ok(SessionEnd::InputClosed);
            };

            let outcome = match MenuChoice::parse(&line) {
                Some(MenuChoice::StartGame) => self.start_game()?,
                Some(MenuChoice::LoadGame) => self.load_game()?,
                Some(MenuChoice::Exit) => {
                    self.renderer.narrate("Thank you for playing Mystic Quest!")?;
                    tracing::info!("session ended by player");
                    return Ok(SessionEnd::Exited);
                }
                None => {
                    let err = GameError::InvalidInput(line);
                    tracing::debug!(error = %err, "main menu");
                    self.renderer.error("Invalid choice. Please try again.")?;
                    continue;
                }
            };

            if let Err(GameError::InputClosed) = outcome {
                tracing::info!("input closed during game");
                return Ok(SessionEnd::InputClosed);
            }
        }
    }

    fn start_game(&mut self) -> anyhow::Result<Result<BattleState, GameError>> {
        self.renderer.prompt("Enter your name: ")?;
        let name = loop {
            let Some(line) = self.input.read_line()? else {
                return Ok(Err(GameError::InputClosed));
            };
            if let Some(word) = first_word(&line) {
                break word.to_string();
            }
        };

        self.renderer.narrate("Starting new game...")?;
        self.play(Combatant::player(name))
    }

    fn load_game(&mut self) -> anyhow::Result<Result<BattleState, GameError>> {
        let record = match self.saves.load_game() {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "load failed");
                self.renderer
                    .error(&format!("Error loading game: {}", handle_error(&e)))?;
                return Ok(Err(e));
            }
        };

        self.renderer.narrate("Game state loaded successfully.")?;
        self.play(record.into_player())
    }

    /// Run one battle to its end. The player is dropped when it returns.
    ///
    /// The inner `Err` is `GameError::InputClosed` when input ran out
    /// mid-battle.
    pub fn play(&mut self, player: Combatant) -> anyhow::Result<Result<BattleState, GameError>> {
        let span = tracing::info_span!("battle", player = %player.name());
        let _entered = span.enter();

        let mut battle = Battle::new(player);
        tracing::info!(player_hp = battle.player().hp(), "battle started");

        while !battle.state().is_over() {
            self.renderer
                .stats(battle.player().stats(), battle.enemy().stats())?;
            self.renderer.battle_menu()?;

            let Some(line) = self.input.read_line()? else {
                tracing::info!(turns = battle.turns(), "battle abandoned");
                return Ok(Err(GameError::InputClosed));
            };
            let Some(action) = BattleAction::parse(&line) else {
                let err = GameError::InvalidInput(line);
                tracing::debug!(error = %err, turns = battle.turns(), "battle menu");
                self.renderer.error("Invalid action. Try again.")?;
                continue;
            };

            let report = battle.resolve(action, &self.saves);
            for log in &report.logs {
                self.renderer.narrate(log)?;
            }
            for err in &report.errors {
                self.renderer.error(err)?;
            }
        }

        let state = battle.state();
        self.renderer.outcome(state)?;
        tracing::info!(%state, turns = battle.turns(), "battle finished");
        Ok(Ok(state))
    }
}
