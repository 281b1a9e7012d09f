//! One encounter between the player and a single enemy.
//!
//! `Battle` is a small state machine: each call to [`Battle::resolve`]
//! applies one player action, lets the enemy retaliate when it survived,
//! and re-evaluates the outcome. It performs no console IO; narration and
//! errors come back in a [`TurnReport`] for the caller to render.

use combat::{Combat, Combatant};
use error::{GameError, handle_error};
use save::SaveSystem;
use strum::Display;

use crate::input::parse_selector;

/// Name of the enemy every battle is fought against.
pub const ENEMY_NAME: &str = "Goblin";

/// High-level phases of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BattleState {
    InProgress,
    PlayerVictory,
    PlayerDefeated,
    PlayerExited,
}

impl BattleState {
    pub fn is_over(self) -> bool {
        self != BattleState::InProgress
    }

    /// Closing line shown once the battle has ended.
    pub fn final_message(self) -> Option<&'static str> {
        match self {
            BattleState::InProgress => None,
            BattleState::PlayerVictory => Some("You defeated the enemy! Victory!"),
            BattleState::PlayerDefeated => Some("You have been defeated. Game over."),
            BattleState::PlayerExited => Some("You leave the battle."),
        }
    }
}

/// Battle menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BattleAction {
    Attack,
    CollectTreasure,
    SaveAndExit,
}

impl BattleAction {
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(BattleAction::Attack),
            2 => Some(BattleAction::CollectTreasure),
            3 => Some(BattleAction::SaveAndExit),
            _ => None,
        }
    }

    /// `None` means the line was not a valid action.
    pub fn parse(line: &str) -> Option<Self> {
        parse_selector(line).and_then(Self::from_selector)
    }
}

/// What happened during one resolved action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Narration lines, in order.
    pub logs: Vec<String>,
    /// Recoverable failures to show on the error stream.
    pub errors: Vec<String>,
    /// Battle state after the action.
    pub state: BattleState,
}

impl TurnReport {
    fn new(state: BattleState) -> Self {
        Self {
            logs: Vec::new(),
            errors: Vec::new(),
            state,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Battle {
    player: Combatant,
    enemy: Combatant,
    state: BattleState,
    turns: u32,
}

impl Battle {
    /// Start a battle against a fresh goblin.
    pub fn new(player: Combatant) -> Self {
        Self::with_enemy(player, Combatant::enemy(ENEMY_NAME))
    }

    /// A player who is already down (e.g. restored from a save at 0 health)
    /// never gets a turn.
    pub fn with_enemy(player: Combatant, enemy: Combatant) -> Self {
        let mut battle = Self {
            player,
            enemy,
            state: BattleState::InProgress,
            turns: 0,
        };
        battle.check_outcome();
        battle
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    /// Actions resolved so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Hand the player back, ending the battle.
    pub fn into_player(self) -> Combatant {
        self.player
    }

    /// Apply one player action.
    pub fn resolve(&mut self, action: BattleAction, saves: &SaveSystem) -> TurnReport {
        if self.state.is_over() {
            tracing::warn!(state = %self.state, %action, "action on a finished battle ignored");
            return TurnReport::new(self.state);
        }

        self.turns += 1;
        let mut report = TurnReport::new(self.state);

        match action {
            BattleAction::Attack => {
                let result = Combat::engage(&mut self.player, &mut self.enemy);
                report.logs.extend(result.logs);
                self.check_outcome();
            }
            BattleAction::CollectTreasure => {
                if let Some(total) = self.player.collect_treasure() {
                    report.logs.push(format!("Collected a treasure! Total: {total}"));
                }
                self.check_outcome();
            }
            BattleAction::SaveAndExit => {
                match saves.save_game(&self.player) {
                    Ok(_) => report.logs.push("Game state saved successfully.".to_string()),
                    Err(e) => report.errors.push(save_error_message(&e)),
                }
                self.state = BattleState::PlayerExited;
            }
        }

        tracing::debug!(
            turn = self.turns,
            %action,
            player_hp = self.player.hp(),
            enemy_hp = self.enemy.hp(),
            state = %self.state,
            "turn resolved"
        );
        report.state = self.state;
        report
    }

    /// Player defeat wins ties with enemy defeat.
    fn check_outcome(&mut self) {
        if !self.player.is_alive() {
            self.state = BattleState::PlayerDefeated;
        } else if !self.enemy.is_alive() {
            self.state = BattleState::PlayerVictory;
        }
    }
}

fn save_error_message(error: &GameError) -> String {
    tracing::warn!(%error, "save failed");
    format!("Error saving game: {}", handle_error(error))
}
