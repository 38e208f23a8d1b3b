// src/systems/win_condition_system.rs

use log::info;

use crate::board::Board;
use crate::components::game_state::GameStatus;
use crate::systems::System;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 組札が全部揃っていれば `Won` にする。Undo で崩れたら `Active` に戻す。
/// 配っている最中 (`Dealing`) は何もしない。
#[derive(Debug, Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }
}

impl System for WinConditionSystem {
    fn run(&mut self, board: &mut Board) {
        match board.status() {
            GameStatus::Active if board.is_won() => {
                info!("WinConditionSystem: 勝利条件達成！🏆");
                board.set_status(GameStatus::Won);
            }
            GameStatus::Won if !board.is_won() => {
                board.set_status(GameStatus::Active);
            }
            _ => {}
        }
    }
}
