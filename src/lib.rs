//! Mystic Quest: a turn-based terminal battle against a goblin, with a
//! one-file save.

pub mod battle;
pub mod config;
pub mod game_loop;
pub mod input;
pub mod music;
pub mod renderer;

pub use battle::{Battle, BattleAction, BattleState, ENEMY_NAME, TurnReport};
pub use combat::{Combat, CombatResult, Combatant, CombatantKind};
pub use config::GameConfig;
pub use error::GameError;
pub use game_loop::{GameLoop, SessionEnd};
pub use save::{SaveRecord, SaveSystem};
