//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};

/// `card` を、一番上が `top` の組札に置けるかチェックする。
///
/// 空の組札にはエースだけ。それ以外は同じスートで、ランクがちょうど1つ上のカード。
/// どちらの場合も表向きでないとダメ。
pub fn can_move_to_foundation(top: Option<&Card>, card: &Card) -> bool {
    if !card.is_face_up {
        return false;
    }
    match top {
        None => card.rank == Rank::Ace,
        Some(top) => card.suit == top.suit && top.rank.next() == Some(card.rank),
    }
}
