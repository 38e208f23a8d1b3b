// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! どのカードがどこに自動で移動できるか、を盤面を読むだけで判断する。
//! 実際に動かすのは `Game` の仕事。

use log::trace;

use crate::board::Board;
use crate::components::card::Card;
use crate::components::stack::StackType;

/// `card` を置ける組札を探す。組札の番号順で最初に見つかったものを返すよ。
///
/// エースなら空いている最初の組札、それ以外は同じスートでひとつ下が乗っている組札。
pub fn find_automatic_foundation_move(board: &Board, card: &Card) -> Option<StackType> {
    let found = StackType::foundations().find(|&stack| board.pile(stack).can_accept(card));
    trace!("[AutoMove] {} -> {:?}", card, found);
    found
}

/// ダブルクリック用の「いい感じの行き先」。
///
/// `from` の `index` 番目から上を持ち上げられるなら、まず組札 (一番上の1枚のときだけ)、
/// 次に他の場札を番号順に見て、最初に置けるところを返す。
pub fn find_smart_move(board: &Board, from: StackType, index: usize) -> Option<StackType> {
    let source = board.get(from)?;
    if !source.can_detach_from(index) {
        return None;
    }
    let card = source.card_at(index)?;
    let is_top = index + 1 == source.len();

    if is_top {
        if let Some(target) = find_automatic_foundation_move(board, card) {
            return Some(target);
        }
    }
    StackType::tableaus()
        .filter(|&stack| stack != from)
        .find(|&stack| board.pile(stack).can_accept(card))
}

/// 自動で組札に上げられる次の1手 (移動元, 移動先)。
///
/// 場札のトップを列の順に見て、次に捨て札のトップを見る。
pub fn next_auto_complete_move(board: &Board) -> Option<(StackType, StackType)> {
    StackType::tableaus()
        .chain(std::iter::once(StackType::Waste))
        .find_map(|from| {
            let top = board.pile(from).top_card()?;
            find_automatic_foundation_move(board, top).map(|to| (from, to))
        })
}
