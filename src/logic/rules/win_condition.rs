//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::card::ALL_RANKS;
use crate::components::stack::FOUNDATION_COUNT;

/// 4つの組札それぞれの枚数から、クリアかどうかを判定する。
/// 全部の組札に13枚ずつ揃っていれば勝ち！
pub fn check_win_condition(foundation_sizes: &[usize]) -> bool {
    foundation_sizes.len() == FOUNDATION_COUNT as usize
        && foundation_sizes.iter().all(|&size| size == ALL_RANKS.len())
}
