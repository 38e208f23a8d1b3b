// src/board.rs
//! 盤面 = 13個の山と進行状態をまとめて持つ入れ物だよ。
//! システムたちはこれを受け取って読み書きする。

use itertools::Itertools;

use crate::components::card::Card;
use crate::components::game_state::GameStatus;
use crate::components::position::Position;
use crate::components::stack::{Pile, PileKind, StackType, PILE_COUNT};
use crate::error::LoadError;
use crate::logic::deck::DECK_SIZE;
use crate::logic::rules;
use crate::protocol::{PileData, SavedGame};

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    piles: Vec<Pile>,
    status: GameStatus,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// 空っぽの13個の山を作る。まだ配る前なので状態は `Dealing`。
    pub fn new() -> Self {
        Self {
            piles: StackType::all().map(Pile::new).collect(),
            status: GameStatus::Dealing,
        }
    }

    /// 山を直接指定して盤面を作る。順番は `StackType::all()` と同じであること。
    pub(crate) fn from_piles(piles: Vec<Pile>, status: GameStatus) -> Self {
        debug_assert_eq!(piles.len(), PILE_COUNT);
        debug_assert!(piles
            .iter()
            .zip(StackType::all())
            .all(|(pile, stack)| pile.stack_type() == stack));
        Self { piles, status }
    }

    /// 指定した山だけにカードを置いたプレイ中の盤面 (テスト用)。
    #[cfg(test)]
    pub(crate) fn with_stacks(stacks: Vec<(StackType, Vec<Card>)>) -> Self {
        let mut piles: Vec<Pile> = StackType::all().map(Pile::new).collect();
        for (stack, cards) in stacks {
            piles[stack.pile_index()] = Pile::with_cards(stack, cards);
        }
        Self::from_piles(piles, GameStatus::Active)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// 山を取り出す。`stack` が盤面に無い番号 (Tableau(9) など) だとパニックするので、
    /// 外から来た値は `get` か `StackType::is_valid` で先に確かめてね。
    pub fn pile(&self, stack: StackType) -> &Pile {
        &self.piles[stack.pile_index()]
    }

    pub fn get(&self, stack: StackType) -> Option<&Pile> {
        self.piles.get(stack.pile_index()).filter(|_| stack.is_valid())
    }

    pub(crate) fn pile_mut(&mut self, stack: StackType) -> &mut Pile {
        &mut self.piles[stack.pile_index()]
    }

    pub fn stock(&self) -> &Pile {
        self.pile(StackType::Stock)
    }

    pub fn waste(&self) -> &Pile {
        self.pile(StackType::Waste)
    }

    pub fn foundations(&self) -> impl Iterator<Item = &Pile> {
        StackType::foundations().map(move |stack| self.pile(stack))
    }

    pub fn tableaus(&self) -> impl Iterator<Item = &Pile> {
        StackType::tableaus().map(move |stack| self.pile(stack))
    }

    /// 各組札の枚数。
    pub fn foundation_sizes(&self) -> Vec<usize> {
        self.foundations().map(Pile::len).collect()
    }

    /// 盤面上のカードの総数。
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    /// 全部の組札が揃っているか。何度呼んでも同じ結果になる純粋な判定。
    pub fn is_won(&self) -> bool {
        rules::check_win_condition(&self.foundation_sizes())
    }

    /// 全部の山を空にする。
    pub(crate) fn clear(&mut self) {
        self.piles = StackType::all().map(Pile::new).collect();
        self.status = GameStatus::Dealing;
    }

    /// 座標の下にあるカードを探す。山どうしは重ならない前提なので最初に当たった山で決まり。
    pub fn locate(&self, point: Position) -> Option<(StackType, usize)> {
        self.piles
            .iter()
            .find_map(|pile| pile.hit_test(point).map(|index| (pile.stack_type(), index)))
    }

    /// 保存用の平らな記録に変換する。
    pub fn to_saved(&self, move_count: u32) -> SavedGame {
        SavedGame {
            piles: self
                .piles
                .iter()
                .map(|pile| PileData { kind: pile.kind(), cards: pile.cards().to_vec() })
                .collect(),
            move_count,
        }
    }

    /// 保存された記録から盤面を組み立てる。
    ///
    /// 山の数と種類の並びが決まった形 (山札, 捨て札, 組札×4, 場札×7) でないもの、
    /// 52枚がちょうど1枚ずつ揃っていないもの、山の並びがルール的にありえないものは拒否する。
    pub fn from_saved(saved: &SavedGame) -> Result<Board, LoadError> {
        if saved.piles.len() != PILE_COUNT {
            return Err(LoadError::PileCount { expected: PILE_COUNT, found: saved.piles.len() });
        }

        for (data, stack) in saved.piles.iter().zip(StackType::all()) {
            if data.kind != stack.kind() {
                return Err(LoadError::PileKind {
                    index: stack.pile_index(),
                    expected: stack.kind(),
                    found: data.kind,
                });
            }
        }

        let all_cards = saved.piles.iter().flat_map(|data| data.cards.iter());
        let total = all_cards.clone().count();
        if total != DECK_SIZE {
            return Err(LoadError::CardCount { expected: DECK_SIZE, found: total });
        }
        if let Some(card) = all_cards.duplicates_by(|card| (card.suit, card.rank)).next() {
            return Err(LoadError::DuplicateCard(*card));
        }

        let piles: Vec<Pile> = saved
            .piles
            .iter()
            .zip(StackType::all())
            .map(|(data, stack)| Pile::with_cards(stack, data.cards.clone()))
            .collect();

        if let Some(pile) = piles.iter().find(|pile| !pile_is_consistent(pile)) {
            return Err(LoadError::InconsistentPile(pile.stack_type()));
        }

        let mut board = Board::from_piles(piles, GameStatus::Active);
        if board.is_won() {
            board.set_status(GameStatus::Won);
        }
        Ok(board)
    }
}

/// 山の中身がその種類の不変条件を満たしているか。
fn pile_is_consistent(pile: &Pile) -> bool {
    let cards = pile.cards();
    match pile.kind() {
        PileKind::Stock => cards.iter().all(|card| !card.is_face_up),
        PileKind::Waste => cards.iter().all(|card| card.is_face_up),
        PileKind::Foundation => {
            cards.iter().all(|card| card.is_face_up)
                && cards.iter().enumerate().all(|(i, card)| {
                    usize::from(card.rank.value()) == i + 1 && card.suit == cards[0].suit
                })
        }
        PileKind::Tableau => {
            let face_down = cards.iter().take_while(|card| !card.is_face_up).count();
            // 裏向きカードが残っているのに一番上まで裏向き、は配り途中でしか起きない
            let top_is_up = cards.last().map_or(true, |top: &Card| top.is_face_up);
            top_is_up && rules::is_valid_run(&cards[face_down..])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::logic::deck::create_standard_deck;

    /// 52枚を全部組札に積んだ盤面の記録。
    fn won_record() -> SavedGame {
        let mut board = Board::new();
        for (i, card) in create_standard_deck().into_iter().enumerate() {
            let mut card = card;
            card.flip();
            board.pile_mut(StackType::Foundation((i / 13) as u8)).append(card);
        }
        board.to_saved(0)
    }

    #[test]
    fn new_board_has_thirteen_empty_piles() {
        let board = Board::new();
        assert_eq!(board.piles().len(), PILE_COUNT);
        assert_eq!(board.card_count(), 0);
        assert_eq!(board.status(), GameStatus::Dealing);
        assert!(!board.is_won());
    }

    #[test]
    fn get_rejects_invalid_stack_indices() {
        let board = Board::new();
        assert!(board.get(StackType::Tableau(6)).is_some());
        assert!(board.get(StackType::Tableau(7)).is_none());
        assert!(board.get(StackType::Foundation(4)).is_none());
    }

    #[test]
    fn saved_record_round_trips_into_an_equal_board() {
        let record = won_record();
        let board = Board::from_saved(&record).expect("full foundations are a valid record");
        assert!(board.is_won());
        assert_eq!(board.status(), GameStatus::Won);
        assert_eq!(board.to_saved(0), record);
    }

    #[test]
    fn wrong_pile_count_is_rejected() {
        let mut record = won_record();
        record.piles.pop();
        assert!(matches!(
            Board::from_saved(&record),
            Err(LoadError::PileCount { expected: 13, found: 12 })
        ));
    }

    #[test]
    fn wrong_kind_sequence_is_rejected() {
        let mut record = won_record();
        record.piles.swap(0, 1);
        assert!(matches!(Board::from_saved(&record), Err(LoadError::PileKind { index: 0, .. })));
    }

    #[test]
    fn duplicate_cards_are_rejected() {
        let mut record = won_record();
        // キングを1枚抜いて、代わりにすでにあるエースを山札に足す (枚数は52のまま)
        record.piles[2].cards.pop();
        record.piles[0].cards.push(Card::new(Suit::Heart, Rank::Ace));
        assert!(matches!(Board::from_saved(&record), Err(LoadError::DuplicateCard(_))));
    }

    #[test]
    fn missing_cards_are_rejected() {
        let mut record = won_record();
        record.piles[5].cards.pop();
        assert!(matches!(Board::from_saved(&record), Err(LoadError::CardCount { found: 51, .. })));
    }

    #[test]
    fn face_up_stock_card_is_rejected() {
        let mut record = won_record();
        // 組札から K♠ を外して、表向きのまま山札に置く
        let king = record.piles[5].cards.pop().expect("spade foundation has cards");
        record.piles[0].cards.push(king);
        assert!(matches!(Board::from_saved(&record), Err(LoadError::InconsistentPile(StackType::Stock))));
    }

    #[test]
    fn broken_foundation_order_is_rejected() {
        let mut record = won_record();
        record.piles[2].cards.swap(3, 4);
        assert!(matches!(
            Board::from_saved(&record),
            Err(LoadError::InconsistentPile(StackType::Foundation(0)))
        ));
    }
}
