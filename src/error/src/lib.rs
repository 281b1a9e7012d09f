//! 游戏错误处理模块
//!
//! Errors raised while running a Mystic Quest session: save-file IO, menu
//! input and configuration. None of them is fatal; callers report the
//! message from [`handle_error`] and carry on.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 游戏运行过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum GameError {
    /// The save file could not be written.
    #[error("Failed to open file for saving: {}", .path.display())]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The save file could not be opened or read.
    #[error("Failed to open file for loading: {}", .path.display())]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 用户输入错误
    #[error("Invalid choice: {0:?}")]
    InvalidInput(String),

    /// Standard input reached end of file.
    #[error("Input stream closed")]
    InputClosed,

    /// 配置无效
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// 处理游戏错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::LoadFailed { source, .. } if source.kind() == io::ErrorKind::NotFound => {
            "No saved game found.".to_string()
        }
        GameError::SaveFailed { source, .. } | GameError::LoadFailed { source, .. }
            if source.kind() == io::ErrorKind::PermissionDenied =>
        {
            "Permission denied while accessing the save file.".to_string()
        }
        GameError::SaveFailed { source, .. } | GameError::LoadFailed { source, .. } => {
            format!("{error} ({source})")
        }
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_save_file_gets_friendly_message() {
        let err = GameError::LoadFailed {
            path: PathBuf::from("game_state.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(handle_error(&err), "No saved game found.");
    }

    #[test]
    fn save_failure_mentions_path_and_cause() {
        let err = GameError::SaveFailed {
            path: PathBuf::from("/nowhere/game_state.txt"),
            source: io::Error::other("disk on fire"),
        };
        let msg = handle_error(&err);
        assert!(msg.contains("/nowhere/game_state.txt"));
        assert!(msg.contains("disk on fire"));
    }

    #[test]
    fn input_errors_use_display() {
        let err = GameError::InvalidInput("7".to_string());
        assert_eq!(handle_error(&err), "Invalid choice: \"7\"");
    }
}
