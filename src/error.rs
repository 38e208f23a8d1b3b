// src/error.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::stack::{PileKind, StackType};

/// 移動が拒否された理由。盤面はそのまま。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    /// もう勝っているので動かせない (リセットしてね)。
    GameOver,
    /// 盤面に存在しない山 (Tableau(9) とか)。
    UnknownPile(StackType),
    /// 同じ山への移動。
    SamePile(StackType),
    /// その位置からは持ち上げられない (裏向き、範囲外、トップ以外など)。
    CannotDetach { from: StackType, index: usize },
    /// 移動先がそのカードを受け付けない。
    CannotAccept { card: Card, to: StackType },
    /// 2枚以上の列は場札にしか置けない。
    RunToNonTableau { to: StackType },
    /// 山札が空でめくれない。
    StockEmpty,
    /// 山札が残っている、または捨て札が空なので戻せない。
    CannotRecycle,
    /// そのカードの行き先がどこにも無い (スマート移動)。
    NoTarget { from: StackType, index: usize },
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::GameOver => write!(f, "the game is already won"),
            MoveRejection::UnknownPile(stack) => write!(f, "no such pile: {:?}", stack),
            MoveRejection::SamePile(stack) => write!(f, "source and target are both {:?}", stack),
            MoveRejection::CannotDetach { from, index } => {
                write!(f, "cannot pick up card {} of {:?}", index, from)
            }
            MoveRejection::CannotAccept { card, to } => write!(f, "{:?} does not accept {}", to, card),
            MoveRejection::RunToNonTableau { to } => {
                write!(f, "runs of several cards can only go to a tableau, not {:?}", to)
            }
            MoveRejection::StockEmpty => write!(f, "the stock is empty"),
            MoveRejection::CannotRecycle => write!(f, "the waste cannot be recycled right now"),
            MoveRejection::NoTarget { from, index } => {
                write!(f, "card {} of {:?} has nowhere to go", index, from)
            }
        }
    }
}

impl std::error::Error for MoveRejection {}

/// 保存データを読み込めなかった理由。読み込み前のゲームはそのまま残るよ。
#[derive(Debug)]
pub enum LoadError {
    /// JSON として読めなかった。
    Json(serde_json::Error),
    PileCount { expected: usize, found: usize },
    PileKind { index: usize, expected: PileKind, found: PileKind },
    CardCount { expected: usize, found: usize },
    DuplicateCard(Card),
    /// 山の並びがルール上ありえない (組札の順番が崩れている、など)。
    InconsistentPile(StackType),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Json(err) => write!(f, "saved game is not valid JSON: {}", err),
            LoadError::PileCount { expected, found } => {
                write!(f, "expected {} piles, found {}", expected, found)
            }
            LoadError::PileKind { index, expected, found } => {
                write!(f, "pile {} should be {:?} but is {:?}", index, expected, found)
            }
            LoadError::CardCount { expected, found } => {
                write!(f, "expected {} cards, found {}", expected, found)
            }
            LoadError::DuplicateCard(card) => write!(f, "card {} appears more than once", card),
            LoadError::InconsistentPile(stack) => write!(f, "{:?} is not in a playable order", stack),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Json(err)
    }
}
