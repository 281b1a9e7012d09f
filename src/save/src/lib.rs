// src/save.rs

use combat::{Combatant, PLAYER_MAX_HP};
use error::GameError;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

/// Save file used when nothing else is configured.
pub const DEFAULT_SAVE_FILE: &str = "game_state.txt";

/// 存档数据: the persisted projection of a player.
///
/// `health` is kept exactly as read; a hand-edited file may hold anything.
/// Treasure progress is not part of the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRecord {
    pub name: String,
    pub health: i64,
}

impl SaveRecord {
    pub fn from_player(player: &Combatant) -> Self {
        Self {
            name: player.name().to_string(),
            health: i64::from(player.hp()),
        }
    }

    /// One value per line: name, then health.
    pub fn encode(&self) -> String {
        format!("{}\n{}\n", self.name, self.health)
    }

    /// Parse the first two whitespace-delimited tokens.
    ///
    /// Never fails: a missing name becomes empty. Health is read from the
    /// leading `[+-]digits` of its token (`70abc` reads as 70); a token
    /// with no digits, or no token at all, reads as 0.
    pub fn decode(text: &str) -> Self {
        let mut tokens = text.split_whitespace();

        let name = match tokens.next() {
            Some(name) => name.to_string(),
            None => {
                tracing::warn!("save file has no player name");
                String::new()
            }
        };

        let health = match tokens.next().map(|token| (token, leading_integer(token))) {
            Some((token, Some(health))) => {
                if token.parse::<i64>().is_err() {
                    tracing::warn!(%token, health, "save file health is malformed, using prefix");
                }
                health
            }
            Some((token, None)) => {
                tracing::warn!(%token, "save file health is not an integer, using 0");
                0
            }
            None => {
                tracing::warn!("save file has no health value, using 0");
                0
            }
        };

        Self { name, health }
    }

    /// Damage needed to bring a fresh player down to the saved health.
    ///
    /// Saved health above full yields no damage; negative health yields
    /// more than enough to reach zero.
    pub fn restore_damage(&self) -> u32 {
        let missing = i64::from(PLAYER_MAX_HP).saturating_sub(self.health);
        u32::try_from(missing.max(0)).unwrap_or(u32::MAX)
    }

    /// Rebuild a player: full health, then the missing health as damage.
    pub fn into_player(self) -> Combatant {
        let damage = self.restore_damage();
        let mut player = Combatant::player(self.name);
        player.take_damage(damage);
        player
    }
}

/// Integer at the start of `token`, saturating on overflow.
fn leading_integer(token: &str) -> Option<i64> {
    let unsigned = token.trim_start_matches(['+', '-']);
    let sign_len = token.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }

    let negative = token.starts_with('-');
    let number = &token[..sign_len + digits];
    Some(number.parse().unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}

/// 存档系统: a single save file at a fixed location.
#[derive(Debug, Clone)]
pub struct SaveSystem {
    path: PathBuf,
}

impl SaveSystem {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 保存游戏状态, replacing any earlier save.
    pub fn save_game(&self, player: &Combatant) -> Result<SaveRecord, GameError> {
        let record = SaveRecord::from_player(player);
        if record.name.chars().any(char::is_whitespace) {
            tracing::warn!(
                name = %record.name,
                "player name contains whitespace and will not load back intact"
            );
        }

        self.write_atomic(record.encode().as_bytes())
            .map_err(|source| GameError::SaveFailed {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!(
            path = %self.path.display(),
            name = %record.name,
            health = record.health,
            "game saved"
        );
        Ok(record)
    }

    /// 加载游戏状态
    pub fn load_game(&self) -> Result<SaveRecord, GameError> {
        let text = fs::read_to_string(&self.path).map_err(|source| GameError::LoadFailed {
            path: self.path.clone(),
            source,
        })?;

        let record = SaveRecord::decode(&text);
        tracing::info!(
            path = %self.path.display(),
            name = %record.name,
            health = record.health,
            "game loaded"
        );
        Ok(record)
    }

    /// 检查是否有存档
    pub fn has_save(&self) -> bool {
        self.path.is_file()
    }

    /// 获取存档文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomic(&self, contents: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        // 创建临时文件
        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(contents)?;
        // 确保数据写入磁盘
        file.sync_all()?;
        drop(file);

        // 原子性重命名
        fs::rename(&temp_path, &self.path).inspect_err(|_| {
            let _ = fs::remove_file(&temp_path);
        })
    }
}

impl Default for SaveSystem {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_FILE)
    }
}
