// src/combat/src/combatant.rs

use std::fmt;
use strum::Display;

/// Health a freshly created player starts with.
pub const PLAYER_MAX_HP: u32 = 100;
/// Health a freshly created enemy starts with.
pub const ENEMY_MAX_HP: u32 = 50;
/// Damage dealt by one player attack.
pub const PLAYER_ATTACK: u32 = 20;
/// Damage dealt by one enemy attack.
pub const ENEMY_ATTACK: u32 = 15;

/// Which side a combatant fights on. Selects starting health and damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum CombatantKind {
    Player,
    Enemy,
}

impl CombatantKind {
    pub fn starting_hp(self) -> u32 {
        match self {
            CombatantKind::Player => PLAYER_MAX_HP,
            CombatantKind::Enemy => ENEMY_MAX_HP,
        }
    }

    pub fn attack_power(self) -> u32 {
        match self {
            CombatantKind::Player => PLAYER_ATTACK,
            CombatantKind::Enemy => ENEMY_ATTACK,
        }
    }

    /// Who this kind attacks, for narration.
    fn opponent_label(self) -> &'static str {
        match self {
            CombatantKind::Player => "enemy",
            CombatantKind::Enemy => "player",
        }
    }
}

/// Player-only progress tracking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerProgress {
    pub treasures_collected: u32,
}

/// 表示可以参加战斗的活体
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    name: String,
    hp: u32,
    kind: CombatantKind,
    progress: Option<PlayerProgress>,
}

impl Combatant {
    /// Create a combatant at the kind's starting health.
    pub fn new(name: impl Into<String>, kind: CombatantKind) -> Self {
        let progress = match kind {
            CombatantKind::Player => Some(PlayerProgress::default()),
            CombatantKind::Enemy => None,
        };
        Self {
            name: name.into(),
            hp: kind.starting_hp(),
            kind,
            progress,
        }
    }

    pub fn player(name: impl Into<String>) -> Self {
        Self::new(name, CombatantKind::Player)
    }

    pub fn enemy(name: impl Into<String>) -> Self {
        Self::new(name, CombatantKind::Enemy)
    }

    /// 获取名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 获取当前生命值
    pub fn hp(&self) -> u32 {
        self.hp
    }

    /// 获取基础攻击力
    pub fn attack_power(&self) -> u32 {
        self.kind.attack_power()
    }

    /// 是否存活
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Treasures collected so far; `None` for enemies.
    pub fn treasures(&self) -> Option<u32> {
        self.progress.as_ref().map(|p| p.treasures_collected)
    }

    /// 造成伤害. Health bottoms out at zero. Returns whether still alive.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        tracing::trace!(name = %self.name, amount, hp = self.hp, "damage applied");
        self.is_alive()
    }

    /// Hit `target` for this combatant's fixed damage and narrate it.
    pub fn attack(&self, target: &mut Combatant) -> String {
        target.take_damage(self.attack_power());
        format!("{} attacks the {}!", self.name, self.kind.opponent_label())
    }

    /// Add one treasure to the player's haul. Enemies carry no treasure.
    pub fn collect_treasure(&mut self) -> Option<u32> {
        let progress = self.progress.as_mut()?;
        progress.treasures_collected += 1;
        Some(progress.treasures_collected)
    }

    /// Read-only snapshot for display.
    pub fn stats(&self) -> CombatantStats<'_> {
        CombatantStats {
            name: &self.name,
            hp: self.hp,
            kind: self.kind,
            treasures: self.treasures(),
        }
    }

    pub fn display_stats(&self) -> String {
        self.stats().to_string()
    }
}

/// Borrowed view of a combatant's visible state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatantStats<'a> {
    pub name: &'a str,
    pub hp: u32,
    pub kind: CombatantKind,
    pub treasures: Option<u32>,
}

impl fmt::Display for CombatantStats<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}, Health: {}", self.kind, self.name, self.hp)?;
        if let Some(treasures) = self.treasures {
            write!(f, ", Treasures: {treasures}")?;
        }
        Ok(())
    }
}
