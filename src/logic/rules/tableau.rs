//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::trace;

use super::common::colors_differ;
use crate::components::card::{Card, Rank};

/// `card` を、一番上が `top` の場札に置けるかチェックする。
///
/// 空の列にはキングだけ。それ以外は、表向きのトップに対して色違いで
/// ランクがちょうど1つ下のカード。
pub fn can_move_to_tableau(top: Option<&Card>, card: &Card) -> bool {
    if !card.is_face_up {
        return false;
    }
    match top {
        None => {
            trace!("[Rule Check] {} onto empty tableau", card);
            card.rank == Rank::King
        }
        Some(top) => {
            let colors_different = colors_differ(card, top);
            let rank_is_one_less = card.rank.next() == Some(top.rank);
            trace!(
                "[Rule Check] {} onto {}: colors different {}, rank one less {}",
                card, top, colors_different, rank_is_one_less
            );
            top.is_face_up && colors_different && rank_is_one_less
        }
    }
}

/// カードの並び (下 → 上) が、降順で色が交互の正しい並びか。
/// 場札の表向き部分はいつもこれを満たしているはず。
pub fn is_valid_run(cards: &[Card]) -> bool {
    cards.iter().all(|card| card.is_face_up)
        && cards
            .windows(2)
            .all(|pair| colors_differ(&pair[0], &pair[1]) && pair[1].rank.next() == Some(pair[0].rank))
}
