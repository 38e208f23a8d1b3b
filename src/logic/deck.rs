// src/logic/deck.rs

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};

/// デッキの枚数。
pub const DECK_SIZE: usize = ALL_SUITS.len() * ALL_RANKS.len();

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// 生成された時点では、すべてのカードは裏向き (`is_face_up: false`) になってる！
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// カードデッキを一様ランダムにシャッフルする関数だよ。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// シードが決まっていればそれで、無ければ OS のエントロピーで乱数生成器を作る。
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// 新品のデッキを作ってシャッフルしたものを返す。
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = create_standard_deck();
    shuffle_deck(&mut deck, rng);
    deck
}
