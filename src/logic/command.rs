// src/logic/command.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::stack::StackType;

/// 実行済みの操作1回分の記録。Undo スタックに積まれるよ。
///
/// どの山からどの山へ何が動いたか、と場札が表になったかだけを覚えておけば
/// きっちり元に戻せる。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 1枚だけの移動。
    SingleMove {
        card: Card,
        from: StackType,
        to: StackType,
        /// 移動元の場札で次のカードが表になったか。
        revealed: bool,
    },
    /// 場札から場札への列ごとの移動 (2枚以上)。
    SequenceMove {
        cards: Vec<Card>,
        from: StackType,
        to: StackType,
        revealed: bool,
    },
    /// 山札から捨て札へ1枚めくった。
    Draw { card: Card },
    /// 捨て札を全部山札に戻した。
    Recycle { count: usize },
}

impl Command {
    pub fn source(&self) -> StackType {
        match self {
            Command::SingleMove { from, .. } | Command::SequenceMove { from, .. } => *from,
            Command::Draw { .. } => StackType::Stock,
            Command::Recycle { .. } => StackType::Waste,
        }
    }

    pub fn target(&self) -> StackType {
        match self {
            Command::SingleMove { to, .. } | Command::SequenceMove { to, .. } => *to,
            Command::Draw { .. } => StackType::Waste,
            Command::Recycle { .. } => StackType::Stock,
        }
    }

    /// 動いたカードの枚数。
    pub fn card_count(&self) -> usize {
        match self {
            Command::SingleMove { .. } | Command::Draw { .. } => 1,
            Command::SequenceMove { cards, .. } => cards.len(),
            Command::Recycle { count } => *count,
        }
    }

    /// 移動元の場札でカードが表になったか。
    pub fn revealed(&self) -> bool {
        match self {
            Command::SingleMove { revealed, .. } | Command::SequenceMove { revealed, .. } => *revealed,
            Command::Draw { .. } | Command::Recycle { .. } => false,
        }
    }
}
