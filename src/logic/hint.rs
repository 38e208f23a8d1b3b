// src/logic/hint.rs
//! ヒント機能！💡 いま打てる手を全部並べて、点数の高い順に返すよ。
//!
//! 点数の目安:
//! - 5: エースを空の組札へ
//! - 4: それ以外の組札行き / 裏向きを開いて、しかもそれがすぐ組札に行ける / キングを空き列へ動かして裏向きも開く
//! - 3: 場札の移動で裏向きを開く / 捨て札のキングを空き列へ
//! - 2: 捨て札から場札へ / 場札のキングを空き列へ
//! - 1: その他の場札の組み替え (意味がある手だけ)
//!
//! 同点なら見つけた順。捨て札からの手が先で、次に場札を列の番号順、
//! 列の中は上のカードから、行き先は組札が先。

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::components::card::{Card, Rank};
use crate::components::stack::{Pile, StackType};
use crate::logic::auto_move::find_automatic_foundation_move;

/// この長さを超える列の移動は、それだけで意味がある手とみなす。
const LONG_RUN: usize = 3;

/// おすすめの1手。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveHint {
    pub from: StackType,
    pub index: usize,
    pub to: StackType,
    /// 持ち上げる列の一番下のカード。
    pub card: Card,
    pub count: usize,
    pub priority: u8,
}

/// ヒントの答え。カードを動かす手が無いときは山札の操作をすすめる。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Move(MoveHint),
    DrawFromStock,
    RecycleWaste,
    NoMoves,
}

/// 一番おすすめの手。
pub fn best_hint(board: &Board) -> Hint {
    if let Some(best) = all_hints(board).into_iter().next() {
        Hint::Move(best)
    } else if !board.stock().is_empty() {
        Hint::DrawFromStock
    } else if !board.waste().is_empty() {
        Hint::RecycleWaste
    } else {
        Hint::NoMoves
    }
}

/// 打てる手を全部、点数の高い順に。同点は見つけた順のまま (安定ソート)。
pub fn all_hints(board: &Board) -> Vec<MoveHint> {
    let mut hints = Vec::new();
    collect_waste_moves(board, &mut hints);
    for from in StackType::tableaus() {
        collect_tableau_moves(board, board.pile(from), &mut hints);
    }
    hints
        .into_iter()
        .sorted_by(|a, b| b.priority.cmp(&a.priority))
        .collect()
}

fn foundation_priority(card: &Card) -> u8 {
    if card.rank == Rank::Ace {
        5
    } else {
        4
    }
}

fn collect_waste_moves(board: &Board, hints: &mut Vec<MoveHint>) {
    let waste = board.waste();
    let Some(card) = waste.top_card() else { return };
    let index = waste.len() - 1;
    let hint = |to: StackType, priority: u8| MoveHint {
        from: StackType::Waste,
        index,
        to,
        card: *card,
        count: 1,
        priority,
    };

    if let Some(to) = find_automatic_foundation_move(board, card) {
        hints.push(hint(to, foundation_priority(card)));
    }
    for to in StackType::tableaus() {
        let target = board.pile(to);
        if target.can_accept(card) {
            let priority = if target.is_empty() { 3 } else { 2 };
            hints.push(hint(to, priority));
        }
    }
}

fn collect_tableau_moves(board: &Board, source: &Pile, hints: &mut Vec<MoveHint>) {
    let from = source.stack_type();
    let cards = source.cards();

    for start in (0..cards.len()).rev() {
        // これより下は裏向きなので、もう持ち上げられない
        if !source.can_detach_from(start) {
            break;
        }
        let card = cards[start];
        let count = cards.len() - start;
        let hint = |to: StackType, priority: u8| MoveHint { from, index: start, to, card, count, priority };

        if count == 1 {
            if let Some(to) = find_automatic_foundation_move(board, &card) {
                hints.push(hint(to, foundation_priority(&card)));
            }
        }
        for to in StackType::tableaus().filter(|&to| to != from) {
            if !board.pile(to).can_accept(&card) {
                continue;
            }
            if let Some(priority) = tableau_move_priority(board, source, start, to) {
                hints.push(hint(to, priority));
            }
        }
    }
}

/// 場札 → 場札の手の点数。やる意味の無い組み替えなら None。
fn tableau_move_priority(board: &Board, source: &Pile, start: usize, to: StackType) -> Option<u8> {
    let cards = source.cards();
    let onto_empty = board.pile(to).is_empty();
    // 列をまるごと空き列へ動かすのは見た目が変わるだけ
    if start == 0 && onto_empty {
        return None;
    }

    let below = start.checked_sub(1).map(|i| cards[i]);
    if let Some(hidden) = below.filter(|card| !card.is_face_up) {
        let revealed = Card::face_up(hidden.suit, hidden.rank);
        let playable = find_automatic_foundation_move(board, &revealed).is_some();
        return Some(if playable || onto_empty { 4 } else { 3 });
    }
    if onto_empty {
        return Some(2);
    }

    let exposes_playable =
        below.map_or(false, |card| find_automatic_foundation_move(board, &card).is_some());
    let frees_column = start == 0 && king_is_waiting(board, source.stack_type());
    let long_run = cards.len() - start > LONG_RUN;
    (exposes_playable || frees_column || long_run).then_some(1)
}

/// 空き列ができたら置きたいキングがいるか。
/// 捨て札のトップ、または他の列で下に何か敷いている表向きのキング。
fn king_is_waiting(board: &Board, except: StackType) -> bool {
    let is_king = |card: &Card| card.is_face_up && card.rank == Rank::King;
    board.waste().top_card().map_or(false, is_king)
        || StackType::tableaus()
            .filter(|&stack| stack != except)
            .any(|stack| board.pile(stack).cards().iter().skip(1).any(is_king))
}
