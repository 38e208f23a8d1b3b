// src/protocol.rs

// ゲームの外 (画面を描く側、セーブする側) とやり取りするデータの形をまとめたファイルだよ！💌
// どれも serde で JSON にできる。
use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::stack::PileKind;
pub use crate::components::stack::StackType;
use crate::error::MoveRejection;

/// ゲームが外に知らせる出来事。`Game::drain_events` でまとめて受け取ってね。
///
/// 描画側はこれを見てアニメーションしたり、得点係はこれを数えたりする。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// カード (または列) の移動が成功した。
    MoveAccepted {
        /// 動かした列の一番下のカード (1枚移動ならそのカード)。
        card: Card,
        /// 動いた枚数。
        count: usize,
        from: StackType,
        to: StackType,
        /// 移動元の場札で裏向きカードが表になったか。
        revealed: bool,
    },
    /// 移動が拒否された。盤面は何も変わってないよ。
    MoveRejected { reason: MoveRejection },
    /// 山札から捨て札に1枚めくった。
    CardDrawn { card: Card },
    /// 捨て札を全部山札に戻した。
    StockRecycled { count: usize },
    /// 直前の操作を取り消した。`from` → `to` が取り消された操作の向き。
    MoveUndone { from: StackType, to: StackType },
    /// 勝った！🏆
    Victory { moves: u32 },
    /// 新しく配り直した。
    GameReset,
    /// セーブデータから復元した。
    GameLoaded,
}

/// 山ひとつ分の保存データ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PileData {
    pub kind: PileKind,
    /// 下から順。各カードは (スート, ランク, 表向きか)。
    pub cards: Vec<Card>,
}

/// ゲームの保存データ。山札, 捨て札, 組札×4, 場札×7 の順に13個の山を持つ。
///
/// Undo の履歴は保存しないよ。復元したらそこから新しく始まる。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedGame {
    pub piles: Vec<PileData>,
    #[serde(default)]
    pub move_count: u32,
}

impl SavedGame {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn saved_game_json_round_trip() {
        let saved = SavedGame {
            piles: vec![PileData {
                kind: PileKind::Waste,
                cards: vec![Card::face_up(Suit::Club, Rank::Nine)],
            }],
            move_count: 3,
        };
        let json = saved.to_json().expect("serialize");
        assert!(json.contains("\"Waste\""));
        assert_eq!(SavedGame::from_json(&json).expect("deserialize"), saved);
    }

    #[test]
    fn move_count_defaults_to_zero_when_missing() {
        let saved = SavedGame::from_json(r#"{"piles":[]}"#).expect("deserialize");
        assert_eq!(saved.move_count, 0);
        assert!(SavedGame::from_json("not json").is_err());
    }

    #[test]
    fn events_serialize_with_variant_names() {
        let event = GameEvent::StockRecycled { count: 24 };
        let json = serde_json::to_string(&event).expect("serialize");
        assert_eq!(json, r#"{"StockRecycled":{"count":24}}"#);
    }
}
