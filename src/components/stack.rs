// src/components/stack.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::position::Position;
use crate::config::layout::*;
use crate::logic::rules;

/// 組札の数。
pub const FOUNDATION_COUNT: u8 = 4;
/// 場札の列数。
pub const TABLEAU_COUNT: u8 = 7;
/// 山の総数 (山札1 + 捨て札1 + 組札4 + 場札7)。
pub const PILE_COUNT: usize = 2 + FOUNDATION_COUNT as usize + TABLEAU_COUNT as usize;

/// 山の「種類」だけを表す enum。番号は持たないよ。
/// 得点計算やセーブデータのように、どの列かは関係ない場面で使う。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileKind {
    Stock,
    Waste,
    Foundation,
    Tableau,
}

/// カードが存在する場所を示す Enum だよ。
/// 種類 + 番号なので、これひとつで13個の山のどれかをピッタリ指せる。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 山札 (Stock)。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
    /// 組札 (Foundation)。4つあるので番号 (0-3) を持つ。
    /// どのスートを受け付けるかは最初に置かれたエースで決まる。
    Foundation(u8),
    /// 場札 (Tableau)。7つの列があるので列番号 (0-6) を持つ。
    Tableau(u8),
}

impl StackType {
    pub fn kind(self) -> PileKind {
        match self {
            StackType::Stock => PileKind::Stock,
            StackType::Waste => PileKind::Waste,
            StackType::Foundation(_) => PileKind::Foundation,
            StackType::Tableau(_) => PileKind::Tableau,
        }
    }

    /// 盤面の山テーブル上の位置。山札, 捨て札, 組札0-3, 場札0-6 の順。
    pub fn pile_index(self) -> usize {
        match self {
            StackType::Stock => 0,
            StackType::Waste => 1,
            StackType::Foundation(i) => 2 + i as usize,
            StackType::Tableau(i) => 2 + FOUNDATION_COUNT as usize + i as usize,
        }
    }

    /// `pile_index` の逆。範囲外なら None。
    pub fn from_pile_index(index: usize) -> Option<StackType> {
        let foundation_end = 2 + FOUNDATION_COUNT as usize;
        match index {
            0 => Some(StackType::Stock),
            1 => Some(StackType::Waste),
            i if i < foundation_end => Some(StackType::Foundation((i - 2) as u8)),
            i if i < PILE_COUNT => Some(StackType::Tableau((i - foundation_end) as u8)),
            _ => None,
        }
    }

    /// 正しい番号を持っているか (Foundation(9) とかは盤面に存在しない)。
    pub fn is_valid(self) -> bool {
        match self {
            StackType::Foundation(i) => i < FOUNDATION_COUNT,
            StackType::Tableau(i) => i < TABLEAU_COUNT,
            StackType::Stock | StackType::Waste => true,
        }
    }

    /// 13個の山を山テーブルの順番で全部返す。
    pub fn all() -> impl Iterator<Item = StackType> {
        (0..PILE_COUNT).filter_map(StackType::from_pile_index)
    }

    pub fn foundations() -> impl Iterator<Item = StackType> {
        (0..FOUNDATION_COUNT).map(StackType::Foundation)
    }

    pub fn tableaus() -> impl Iterator<Item = StackType> {
        (0..TABLEAU_COUNT).map(StackType::Tableau)
    }

    /// この山の基準位置 (左上)。
    pub fn base_position(self) -> Position {
        match self {
            StackType::Stock => Position::new(STOCK_POS_X, STOCK_POS_Y),
            StackType::Waste => Position::new(WASTE_POS_X, WASTE_POS_Y),
            StackType::Foundation(i) => Position::new(
                FOUNDATION_START_X + f32::from(i) * FOUNDATION_X_OFFSET,
                FOUNDATION_START_Y,
            ),
            StackType::Tableau(i) => Position::new(
                TABLEAU_START_X + f32::from(i) * TABLEAU_X_OFFSET,
                TABLEAU_START_Y,
            ),
        }
    }
}

/// `Pile::remove_from` の結果。持ち上げたカードと、その下のカードを
/// 表に返したかどうか。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detached {
    pub cards: Vec<Card>,
    pub revealed: bool,
}

/// カードの山ひとつ。末尾が一番上だよ。
///
/// 置けるかどうかの判定は種類ごとのルール (`logic::rules::can_accept`) に任せる。
/// 中身を書き換えるメソッドは `pub(crate)` で、ゲーム側のコマンドだけが呼ぶ。
#[derive(Debug, Clone, PartialEq)]
pub struct Pile {
    stack_type: StackType,
    position: Position,
    cards: Vec<Card>,
}

impl Pile {
    pub fn new(stack_type: StackType) -> Self {
        Self::with_cards(stack_type, Vec::new())
    }

    pub(crate) fn with_cards(stack_type: StackType, cards: Vec<Card>) -> Self {
        Self {
            stack_type,
            position: stack_type.base_position(),
            cards,
        }
    }

    pub fn stack_type(&self) -> StackType {
        self.stack_type
    }

    pub fn kind(&self) -> PileKind {
        self.stack_type.kind()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn card_at(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// このカードを一番上に置けるか。
    pub fn can_accept(&self, card: &Card) -> bool {
        rules::can_accept(self.kind(), self.top_card(), card)
    }

    /// `index` から上を持ち上げられるか。
    pub fn can_detach_from(&self, index: usize) -> bool {
        rules::can_detach_from(self.kind(), &self.cards, index)
    }

    pub(crate) fn append(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn extend(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }

    /// 一番上を取る。空なら None を返すだけ。
    pub(crate) fn remove_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// `index` から上を全部取り外す。場札なら、新しく一番上になった
    /// 裏向きカードを表に返すよ (自動で開くルール)。
    pub(crate) fn remove_from(&mut self, index: usize) -> Detached {
        let cards = self.take_from(index);
        let revealed = self.kind() == PileKind::Tableau && self.reveal_top();
        Detached { cards, revealed }
    }

    /// 自動で開かずに取り外す。Undo で使う。
    pub(crate) fn take_from(&mut self, index: usize) -> Vec<Card> {
        if index >= self.cards.len() {
            return Vec::new();
        }
        self.cards.split_off(index)
    }

    /// 一番上が裏向きなら表にして true。
    pub(crate) fn reveal_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(top) if !top.is_face_up => {
                top.flip();
                true
            }
            _ => false,
        }
    }

    /// 一番上が表向きなら裏に戻して true。`reveal_top` の逆。
    pub(crate) fn conceal_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(top) if top.is_face_up => {
                top.flip();
                true
            }
            _ => false,
        }
    }

    /// `index` 番目のカードを置くときのずらし量 (種類ごとのレイアウト)。
    pub fn card_offset(&self, index: usize) -> Position {
        match self.kind() {
            PileKind::Stock | PileKind::Foundation => Position::default(),
            PileKind::Waste if index > 0 => Position::new(WASTE_FAN_X_OFFSET, 0.0),
            PileKind::Waste => Position::default(),
            PileKind::Tableau => Position::new(0.0, index as f32 * TABLEAU_CASCADE_Y_OFFSET),
        }
    }

    /// `index` 番目のカードの左上の座標。
    pub fn card_position(&self, index: usize) -> Position {
        self.position.offset_by(self.card_offset(index))
    }

    /// 座標の下にあるカードの番号。重なっていたら一番上 (後から置いた方) が勝つ。
    pub fn hit_test(&self, point: Position) -> Option<usize> {
        (0..self.cards.len())
            .rev()
            .find(|&index| self.card_position(index).card_contains(point))
    }

    /// 空の山の枠をクリックしたかどうか。
    pub fn outline_contains(&self, point: Position) -> bool {
        self.position.card_contains(point)
    }
}
