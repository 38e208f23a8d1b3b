// src/systems/deal_system.rs

use log::{info, warn};

use crate::board::Board;
use crate::components::card::Card;
use crate::components::game_state::GameStatus;
use crate::components::stack::StackType;
use crate::logic::deck::DECK_SIZE;
use crate::systems::System;

// === 初期カード配置システム！ ===
// ゲーム開始時に、7つの場札と山札にカードを配る役割を担うシステムだよ。
// シャッフルは呼ぶ側の仕事。ここは渡されたデッキの順番どおりに配るだけなので、
// 同じデッキなら必ず同じ盤面になる。
pub struct DealInitialCardsSystem {
    /// 配るデッキ。末尾が一番上。
    deck: Vec<Card>,
}

impl DealInitialCardsSystem {
    pub fn new(deck: Vec<Card>) -> Self {
        Self { deck }
    }
}

impl System for DealInitialCardsSystem {
    /// 盤面を空にしてから配る。
    ///
    /// - 場札 i 列目 (0始まり) に i+1 枚。一番上だけ表向き。
    /// - 残り24枚は全部裏向きで山札へ。デッキの末尾が山札の一番上になる。
    fn run(&mut self, board: &mut Board) {
        if self.deck.len() != DECK_SIZE {
            warn!("DealInitialCardsSystem: デッキが {} 枚しかありません", self.deck.len());
        }

        board.clear();
        let mut deck = std::mem::take(&mut self.deck);
        for card in deck.iter_mut() {
            card.is_face_up = false;
        }

        for (i, column) in StackType::tableaus().enumerate() {
            for row in 0..=i {
                let Some(mut card) = deck.pop() else { break };
                if row == i {
                    card.flip();
                }
                board.pile_mut(column).append(card);
            }
        }

        let stock_count = deck.len();
        board.pile_mut(StackType::Stock).extend(deck);
        board.set_status(GameStatus::Active);
        info!("🃏 配り終わりました (山札 {} 枚)", stock_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::deck::{create_standard_deck, make_rng, shuffled_deck};
    use std::collections::HashSet;

    #[test]
    fn test_initial_deal() {
        let mut board = Board::new();
        DealInitialCardsSystem::new(shuffled_deck(&mut make_rng(Some(42)))).run(&mut board);

        assert_eq!(board.status(), GameStatus::Active);
        assert_eq!(board.card_count(), 52);
        assert_eq!(board.stock().len(), 24);
        assert!(board.stock().cards().iter().all(|card| !card.is_face_up));
        assert!(board.waste().is_empty());
        assert!(board.foundations().all(|pile| pile.is_empty()));

        for (i, pile) in board.tableaus().enumerate() {
            assert_eq!(pile.len(), i + 1, "場札 {} 列目の枚数がおかしい", i);
            let (top, rest) = pile.cards().split_last().expect("tableau is not empty");
            assert!(top.is_face_up);
            assert!(rest.iter().all(|card| !card.is_face_up));
        }

        let unique: HashSet<_> =
            board.piles().iter().flat_map(|pile| pile.cards()).map(|c| (c.suit, c.rank)).collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn deal_follows_deck_order() {
        let deck = create_standard_deck();
        let mut board = Board::new();
        DealInitialCardsSystem::new(deck.clone()).run(&mut board);

        // 1枚目に配られるのはデッキの末尾
        let first = board.pile(StackType::Tableau(0)).cards()[0];
        assert!(first.same_identity(&deck[51]));
        // 山札の一番上は、配り終わったあとのデッキの末尾
        let stock_top = board.stock().top_card().expect("stock has cards");
        assert!(stock_top.same_identity(&deck[23]));
    }

    #[test]
    fn dealing_twice_replaces_the_old_board() {
        let mut board = Board::new();
        DealInitialCardsSystem::new(create_standard_deck()).run(&mut board);
        DealInitialCardsSystem::new(create_standard_deck()).run(&mut board);
        assert_eq!(board.card_count(), 52);
    }
}
