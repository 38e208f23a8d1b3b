// src/systems/mod.rs

use crate::board::Board;

pub mod deal_system;
pub mod move_card_system;
pub mod win_condition_system;

pub use deal_system::DealInitialCardsSystem;
pub use move_card_system::MoveCardSystem;
pub use win_condition_system::WinConditionSystem;

/// System（システム）トレイトだよ！
///
/// 盤面 (`Board`) を受け取って、ゲームのルールに沿って中身を読んだり書き換えたりする。
/// 配る、勝ち判定する、みたいに関心ごとにひとつずつ作るよ。
pub trait System {
    fn run(&mut self, board: &mut Board);
}
