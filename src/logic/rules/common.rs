//! ルール判定で共通して使うヘルパーを置くよ。

use crate::components::card::{Card, Suit};

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        if suit.is_red() {
            CardColor::Red
        } else {
            CardColor::Black
        }
    }

    pub fn of(card: &Card) -> Self {
        CardColor::from_suit(card.suit)
    }
}

/// 2枚の色が違うか (赤と黒)。
pub(crate) fn colors_differ(a: &Card, b: &Card) -> bool {
    CardColor::of(a) != CardColor::of(b)
}
