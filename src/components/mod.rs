// src/components/mod.rs

// ゲームのデータ部品たち。ロジックは持たず、ルール判定は logic 側に任せる。
pub mod card;
pub mod game_state;
pub mod position;
pub mod stack;

pub use card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use game_state::GameStatus;
pub use position::Position;
pub use stack::{Detached, Pile, PileKind, StackType, FOUNDATION_COUNT, PILE_COUNT, TABLEAU_COUNT};
