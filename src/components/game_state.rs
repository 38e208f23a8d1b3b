// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆
///
/// `Dealing → Active → Won` と進む。リセットすると `Active` に戻るし、
/// 勝った局面から Undo したときも `Active` に戻る。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// カードを配っている最中。
    #[default]
    Dealing,
    /// プレイ中。
    Active,
    /// 勝利！全部の組札に13枚ずつ。
    Won,
}

impl GameStatus {
    pub fn is_won(self) -> bool {
        self == GameStatus::Won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_status_comparison() {
        assert_eq!(GameStatus::default(), GameStatus::Dealing);
        assert_ne!(GameStatus::Active, GameStatus::Won);
        assert!(GameStatus::Won.is_won());
        assert!(!GameStatus::Active.is_won());
    }
}
