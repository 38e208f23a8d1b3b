// src/logic/rules/tests.rs
//! rules モジュール内の関数のユニットテスト。

use super::*;
use crate::components::card::{Card, Rank, Suit};
use crate::components::stack::PileKind;

fn up(suit: Suit, rank: Rank) -> Card {
    Card::face_up(suit, rank)
}

fn down(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn test_card_color() {
    assert_eq!(CardColor::from_suit(Suit::Heart), CardColor::Red);
    assert_eq!(CardColor::from_suit(Suit::Diamond), CardColor::Red);
    assert_eq!(CardColor::from_suit(Suit::Club), CardColor::Black);
    assert_eq!(CardColor::from_suit(Suit::Spade), CardColor::Black);
}

#[test]
fn test_stock_waste_rules() {
    assert!(can_deal_from_stock(false), "ストックがあれば配れるはず");
    assert!(!can_reset_stock_from_waste(false, false));
    assert!(!can_reset_stock_from_waste(false, true));

    assert!(!can_deal_from_stock(true), "ストックが空なら配れないはず");
    assert!(can_reset_stock_from_waste(true, false), "ストックが空でウェストにあればリセットできるはず");
    assert!(!can_reset_stock_from_waste(true, true));
}

#[test]
fn test_win_condition() {
    assert!(check_win_condition(&[13, 13, 13, 13]), "全部13枚ならクリア！🏆");
    assert!(!check_win_condition(&[13, 13, 13, 12]));
    assert!(!check_win_condition(&[0, 0, 0, 0]));
    assert!(!check_win_condition(&[13, 13, 13]), "組札が足りないのはクリアじゃない");
}

#[test]
fn test_can_move_to_foundation() {
    // 空の組札にはエースだけ
    assert!(can_move_to_foundation(None, &up(Suit::Heart, Rank::Ace)));
    assert!(can_move_to_foundation(None, &up(Suit::Spade, Rank::Ace)));
    assert!(!can_move_to_foundation(None, &up(Suit::Heart, Rank::Two)));
    // 裏向きはダメ
    assert!(!can_move_to_foundation(None, &down(Suit::Heart, Rank::Ace)));

    let ace_hearts = up(Suit::Heart, Rank::Ace);
    assert!(can_move_to_foundation(Some(&ace_hearts), &up(Suit::Heart, Rank::Two)));
    assert!(!can_move_to_foundation(Some(&ace_hearts), &up(Suit::Diamond, Rank::Two)), "スート違い");
    assert!(!can_move_to_foundation(Some(&ace_hearts), &up(Suit::Heart, Rank::Three)), "ランク飛ばし");
    assert!(!can_move_to_foundation(Some(&ace_hearts), &up(Suit::Heart, Rank::Ace)));
}

#[test]
fn test_can_move_to_tableau() {
    // シナリオ 1: 空の列にはキングだけ
    assert!(can_move_to_tableau(None, &up(Suit::Spade, Rank::King)));
    assert!(!can_move_to_tableau(None, &up(Suit::Heart, Rank::Queen)));

    let queen_hearts = up(Suit::Heart, Rank::Queen);
    // シナリオ 2: 色違いで1つ下
    assert!(can_move_to_tableau(Some(&queen_hearts), &up(Suit::Spade, Rank::Jack)));
    assert!(can_move_to_tableau(Some(&queen_hearts), &up(Suit::Club, Rank::Jack)));
    // シナリオ 3: 同色
    assert!(!can_move_to_tableau(Some(&queen_hearts), &up(Suit::Diamond, Rank::Jack)));
    // シナリオ 4: ランク違い
    assert!(!can_move_to_tableau(Some(&queen_hearts), &up(Suit::Spade, Rank::Ten)));
    assert!(!can_move_to_tableau(Some(&queen_hearts), &up(Suit::Spade, Rank::King)));
    // シナリオ 5: トップが裏向き
    assert!(!can_move_to_tableau(Some(&down(Suit::Heart, Rank::Queen)), &up(Suit::Spade, Rank::Jack)));
    // シナリオ 6: 置くカードが裏向き
    assert!(!can_move_to_tableau(Some(&queen_hearts), &down(Suit::Spade, Rank::Jack)));
}

#[test]
fn test_can_accept_dispatches_on_kind() {
    let king = up(Suit::Club, Rank::King);
    let ace = up(Suit::Club, Rank::Ace);
    assert!(can_accept(PileKind::Tableau, None, &king));
    assert!(!can_accept(PileKind::Foundation, None, &king));
    assert!(can_accept(PileKind::Foundation, None, &ace));
    assert!(!can_accept(PileKind::Stock, None, &ace));
    assert!(!can_accept(PileKind::Waste, None, &ace));
}

#[test]
fn test_can_detach_from() {
    let cards = [down(Suit::Club, Rank::Eight), up(Suit::Heart, Rank::Seven), up(Suit::Club, Rank::Six)];
    assert!(!can_detach_from(PileKind::Tableau, &cards, 0), "裏向きは持てない");
    assert!(can_detach_from(PileKind::Tableau, &cards, 1));
    assert!(can_detach_from(PileKind::Tableau, &cards, 2));
    assert!(!can_detach_from(PileKind::Tableau, &cards, 3), "範囲外");
    assert!(!can_detach_from(PileKind::Foundation, &cards, 1), "組札はトップだけ");
    assert!(can_detach_from(PileKind::Foundation, &cards, 2));
    assert!(!can_detach_from(PileKind::Stock, &[down(Suit::Club, Rank::Two)], 0));
    assert!(!can_detach_from(PileKind::Waste, &[], 0));
}

#[test]
fn test_is_valid_run() {
    assert!(is_valid_run(&[]));
    assert!(is_valid_run(&[up(Suit::Spade, Rank::Nine)]));
    assert!(is_valid_run(&[
        up(Suit::Spade, Rank::Nine),
        up(Suit::Heart, Rank::Eight),
        up(Suit::Club, Rank::Seven),
    ]));
    assert!(!is_valid_run(&[up(Suit::Spade, Rank::Nine), up(Suit::Club, Rank::Eight)]));
    assert!(!is_valid_run(&[up(Suit::Spade, Rank::Nine), up(Suit::Heart, Rank::Seven)]));
    assert!(!is_valid_run(&[down(Suit::Spade, Rank::Nine)]));
}
