// src/combat/src/lib.rs

pub mod combatant;


pub use crate::combatant::{
    Combatant, CombatantKind, CombatantStats, ENEMY_ATTACK, ENEMY_MAX_HP, PLAYER_ATTACK,
    PLAYER_MAX_HP, PlayerProgress,
};

/// Handles combat interactions between combatants
pub struct Combat;

impl Combat {
    /// Attacker strikes first; the defender hits back only if it survived.
    pub fn engage(attacker: &mut Combatant, defender: &mut Combatant) -> CombatResult {
        let mut result = Self::resolve_attack(attacker, defender);

        if defender.is_alive() {
            let counter = Self::resolve_attack(defender, attacker);
            result.retaliated = true;
            result.combine(counter);
        }

        tracing::debug!(
            attacker = attacker.name(),
            attacker_hp = attacker.hp(),
            defender = defender.name(),
            defender_hp = defender.hp(),
            retaliated = result.retaliated,
            "exchange resolved"
        );
        result
    }

    /// Resolve a single attack with combat logs
    pub fn resolve_attack(attacker: &Combatant, defender: &mut Combatant) -> CombatResult {
        let mut result = CombatResult::new();
        result.log(attacker.attack(defender));
        result
    }
}

/// Combat result with detailed logs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombatResult {
    pub logs: Vec<String>, // Combat messages for UI
    pub retaliated: bool,  // Whether the defender struck back
}

impl CombatResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, message: String) {
        self.logs.push(message);
    }

    pub fn combine(&mut self, other: CombatResult) {
        self.logs.extend(other.logs);
        self.retaliated = self.retaliated || other.retaliated;
    }
}
