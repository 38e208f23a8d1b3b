// src/systems/move_card_system.rs

use log::{debug, warn};

use crate::board::Board;
use crate::components::game_state::GameStatus;
use crate::components::stack::{PileKind, StackType};
use crate::error::MoveRejection;
use crate::logic::command::Command;
use crate::logic::rules;

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// 「どの山の何枚目から、どの山へ」を受け取って、ルール上可能かチェックし、
/// 可能なら盤面を書き換えて `Command` を返す。返ってきた `Command` を
/// `undo` に渡せばきっちり元通り。
///
/// チェックは書き換えの前に全部終わらせるので、拒否されたときの盤面は無傷だよ。
#[derive(Debug, Default)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    pub fn new() -> Self {
        Self
    }

    /// 移動できるかだけ調べる。盤面は読むだけ。
    pub fn check_move_validity(
        &self,
        board: &Board,
        from: StackType,
        index: usize,
        to: StackType,
    ) -> Result<(), MoveRejection> {
        if board.status() == GameStatus::Won {
            return Err(MoveRejection::GameOver);
        }
        let source = board.get(from).ok_or(MoveRejection::UnknownPile(from))?;
        let target = board.get(to).ok_or(MoveRejection::UnknownPile(to))?;
        if from == to {
            return Err(MoveRejection::SamePile(from));
        }
        if !source.can_detach_from(index) {
            return Err(MoveRejection::CannotDetach { from, index });
        }

        let run_len = source.len() - index;
        if run_len > 1 && to.kind() != PileKind::Tableau {
            return Err(MoveRejection::RunToNonTableau { to });
        }

        // 列の一番下のカードだけを移動先のトップと比べればいい (列の中身は detach で確認済み)
        let card = source.cards()[index];
        if !target.can_accept(&card) {
            return Err(MoveRejection::CannotAccept { card, to });
        }
        Ok(())
    }

    /// チェックしてから移動する。
    pub fn move_cards(
        &mut self,
        board: &mut Board,
        from: StackType,
        index: usize,
        to: StackType,
    ) -> Result<Command, MoveRejection> {
        if let Err(reason) = self.check_move_validity(board, from, index, to) {
            debug!("MoveCardSystem: {:?}[{}] -> {:?} は拒否: {}", from, index, to, reason);
            return Err(reason);
        }
        Ok(self.apply_move(board, from, index, to))
    }

    fn apply_move(&mut self, board: &mut Board, from: StackType, index: usize, to: StackType) -> Command {
        let detached = board.pile_mut(from).remove_from(index);
        debug_assert!(!detached.cards.is_empty(), "検証済みの移動で空の列を持ち上げた");

        let command = match detached.cards.as_slice() {
            [card] => Command::SingleMove { card: *card, from, to, revealed: detached.revealed },
            cards => Command::SequenceMove {
                cards: cards.to_vec(),
                from,
                to,
                revealed: detached.revealed,
            },
        };
        board.pile_mut(to).extend(detached.cards);
        command
    }

    /// 山札の一番上を表にして捨て札へ。
    pub fn draw(&mut self, board: &mut Board) -> Result<Command, MoveRejection> {
        if board.status() == GameStatus::Won {
            return Err(MoveRejection::GameOver);
        }
        if !rules::can_deal_from_stock(board.stock().is_empty()) {
            return Err(MoveRejection::StockEmpty);
        }
        let mut card = board
            .pile_mut(StackType::Stock)
            .remove_top()
            .ok_or(MoveRejection::StockEmpty)?;
        card.is_face_up = true;
        board.pile_mut(StackType::Waste).append(card);
        Ok(Command::Draw { card })
    }

    /// 山札が空のとき、捨て札を全部裏にして山札に戻す。
    ///
    /// 捨て札の上から順に積み直すので、最初にめくったカードが山札の一番上に来る。
    /// 次にめくる順番は前の周回と同じになるよ。
    pub fn recycle(&mut self, board: &mut Board) -> Result<Command, MoveRejection> {
        if board.status() == GameStatus::Won {
            return Err(MoveRejection::GameOver);
        }
        if !rules::can_reset_stock_from_waste(board.stock().is_empty(), board.waste().is_empty()) {
            return Err(MoveRejection::CannotRecycle);
        }
        let mut count = 0;
        while let Some(mut card) = board.pile_mut(StackType::Waste).remove_top() {
            card.is_face_up = false;
            board.pile_mut(StackType::Stock).append(card);
            count += 1;
        }
        Ok(Command::Recycle { count })
    }

    /// `Command` を巻き戻す。直前に実行したものから順に渡すこと。
    pub fn undo(&mut self, board: &mut Board, command: &Command) {
        match command {
            Command::SingleMove { from, to, revealed, .. }
            | Command::SequenceMove { from, to, revealed, .. } => {
                let count = command.card_count();
                let target = board.pile_mut(*to);
                let cards = target.take_from(target.len().saturating_sub(count));
                debug_assert_eq!(cards.len(), count, "Undo 対象のカードが移動先に無い");

                let source = board.pile_mut(*from);
                if *revealed {
                    source.conceal_top();
                }
                source.extend(cards);
            }
            Command::Draw { .. } => {
                if let Some(mut card) = board.pile_mut(StackType::Waste).remove_top() {
                    card.is_face_up = false;
                    board.pile_mut(StackType::Stock).append(card);
                } else {
                    warn!("MoveCardSystem: Undo する捨て札がありません");
                }
            }
            Command::Recycle { count } => {
                for _ in 0..*count {
                    let Some(mut card) = board.pile_mut(StackType::Stock).remove_top() else {
                        warn!("MoveCardSystem: Undo する山札が足りません");
                        break;
                    };
                    card.is_face_up = true;
                    board.pile_mut(StackType::Waste).append(card);
                }
            }
        }
    }
}
