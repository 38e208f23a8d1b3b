// src/lib.rs

//! クロンダイク (ソリティア) のルールエンジンだよ！🃏
//!
//! 盤面の状態とルール判定、Undo、ヒント、セーブ/ロードまでを持っていて、
//! 描画や入力はホスト側に任せる。ホストは `Game` を作って操作を呼び、
//! `drain_events` で出来事を受け取って画面に反映する感じ。
//!
//! ```
//! use klondike_rules::{Game, GameConfig, StackType};
//!
//! let mut game = Game::new(GameConfig::seeded(7));
//! game.click_stock().expect("a fresh deal has 24 cards in the stock");
//! let waste_top = game.board().waste().top_card().copied();
//! assert!(waste_top.map_or(false, |card| card.is_face_up));
//! assert!(game.pile(StackType::Tableau(6)).is_some());
//! ```

// 自分で作ったモジュールたち！
pub mod board;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod logic;
pub mod protocol;
pub mod score;
pub mod systems;
pub mod timer;

pub use board::Board;
pub use components::{Card, GameStatus, Pile, PileKind, Position, Rank, StackType, Suit};
pub use config::GameConfig;
pub use error::{LoadError, MoveRejection};
pub use game::Game;
pub use logic::command::Command;
pub use logic::hint::{Hint, MoveHint};
pub use protocol::{GameEvent, PileData, SavedGame};
pub use score::{ScoreKeeper, ScorePolicy, StandardScoring};
pub use timer::GameTimer;
