//! カード移動の全体的な妥当性チェックを行う。
//! 山の種類ごとのルールはここで一本の match に集まるよ。

use log::debug;

use super::{foundation, tableau};
use crate::components::card::Card;
use crate::components::stack::PileKind;

/// 種類が `kind` で一番上が `top` の山に、`candidate` を置けるか。
pub fn can_accept(kind: PileKind, top: Option<&Card>, candidate: &Card) -> bool {
    match kind {
        PileKind::Foundation => foundation::can_move_to_foundation(top, candidate),
        PileKind::Tableau => tableau::can_move_to_tableau(top, candidate),
        PileKind::Stock | PileKind::Waste => {
            // 山札と捨て札には外から直接置けない。配る・戻す操作だけが積む。
            debug!("[Rules Validation] Placing onto {:?} is not allowed.", kind);
            false
        }
    }
}

/// 種類が `kind` の山 `cards` から、`index` 番目より上を持ち上げられるか。
///
/// 裏向きのカードは絶対に持ち上げられない。場札以外は一番上の1枚だけ。
pub fn can_detach_from(kind: PileKind, cards: &[Card], index: usize) -> bool {
    let Some(lifted) = cards.get(index..) else {
        return false;
    };
    if lifted.is_empty() || !lifted.iter().all(|card| card.is_face_up) {
        return false;
    }
    match kind {
        PileKind::Tableau => true,
        PileKind::Stock | PileKind::Waste | PileKind::Foundation => index + 1 == cards.len(),
    }
}
