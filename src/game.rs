// src/game.rs
//! ゲーム全体の司令塔！🎮
//!
//! 盤面とシステムたちを持っていて、外からの操作 (カードを動かす、山札をめくる、Undo…) を
//! 受け付けるのはここだけ。結果は `Result` で返すのに加えて、`GameEvent` をキューに積むので
//! 描画側や得点係は `drain_events` でまとめて受け取ってね。

use std::collections::VecDeque;

use log::{debug, info};
use rand::rngs::StdRng;

use crate::board::Board;
use crate::components::card::Rank;
use crate::components::game_state::GameStatus;
use crate::components::position::Position;
use crate::components::stack::{Pile, StackType};
use crate::config::GameConfig;
use crate::error::{LoadError, MoveRejection};
use crate::logic::auto_move::{find_automatic_foundation_move, find_smart_move, next_auto_complete_move};
use crate::logic::command::Command;
use crate::logic::deck::{make_rng, shuffled_deck};
use crate::logic::hint::{self, Hint, MoveHint};
use crate::protocol::{GameEvent, SavedGame};
use crate::systems::{DealInitialCardsSystem, MoveCardSystem, System, WinConditionSystem};

pub struct Game {
    board: Board,
    config: GameConfig,
    rng: StdRng,
    /// 実行済みの操作。最後が一番新しい。
    history: Vec<Command>,
    move_count: u32,
    events: VecDeque<GameEvent>,
    move_system: MoveCardSystem,
    win_system: WinConditionSystem,
}

impl Game {
    /// 設定どおりにシャッフルして配ったゲームを作る。
    pub fn new(config: GameConfig) -> Self {
        let rng = make_rng(config.seed);
        let mut game = Self {
            board: Board::new(),
            config,
            rng,
            history: Vec::new(),
            move_count: 0,
            events: VecDeque::new(),
            move_system: MoveCardSystem::new(),
            win_system: WinConditionSystem::new(),
        };
        game.deal();
        game
    }

    /// シード固定で作る。
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameConfig::seeded(seed))
    }

    /// 盤面を直接渡して作る (テスト用)。
    #[cfg(test)]
    pub(crate) fn from_board(board: Board, config: GameConfig) -> Self {
        let rng = make_rng(config.seed);
        Self {
            board,
            config,
            rng,
            history: Vec::new(),
            move_count: 0,
            events: VecDeque::new(),
            move_system: MoveCardSystem::new(),
            win_system: WinConditionSystem::new(),
        }
    }

    /// 配り直す。Undo の履歴と手数もリセット。
    pub fn reset(&mut self) {
        self.deal();
        self.events.push_back(GameEvent::GameReset);
        info!("🔄 ゲームをリセットしました");
    }

    fn deal(&mut self) {
        let deck = shuffled_deck(&mut self.rng);
        DealInitialCardsSystem::new(deck).run(&mut self.board);
        self.history.clear();
        self.move_count = 0;
    }

    // --- 読み取り ---

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 山を取り出す。盤面に無い番号なら None。
    pub fn pile(&self, stack: StackType) -> Option<&Pile> {
        self.board.get(stack)
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// 座標の下にあるカード。
    pub fn locate(&self, point: Position) -> Option<(StackType, usize)> {
        self.board.locate(point)
    }

    /// 勝っているか。盤面を見るだけなので何回呼んでも同じ答え。
    pub fn check_victory(&self) -> bool {
        self.board.is_won()
    }

    /// たまったイベントを全部取り出す。
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    // --- 操作 ---

    /// `from` の `index` 番目から上を `to` へ動かす。
    ///
    /// 拒否されたときは盤面も履歴も手数も変わらず、`MoveRejected` だけが積まれる。
    pub fn request_move(&mut self, from: StackType, index: usize, to: StackType) -> Result<(), MoveRejection> {
        match self.move_system.move_cards(&mut self.board, from, index, to) {
            Ok(command) => {
                self.commit(command);
                Ok(())
            }
            Err(reason) => Err(self.reject(reason)),
        }
    }

    /// 山札を1枚めくる。設定でオンなら、めくったエースはそのまま組札へ。
    pub fn draw_from_stock(&mut self) -> Result<(), MoveRejection> {
        let command = match self.move_system.draw(&mut self.board) {
            Ok(command) => command,
            Err(reason) => return Err(self.reject(reason)),
        };
        let drawn = match &command {
            Command::Draw { card } => Some(*card),
            _ => None,
        };
        self.commit(command);

        if let Some(card) = drawn.filter(|card| self.config.auto_move_aces && card.rank == Rank::Ace) {
            if let Some(to) = find_automatic_foundation_move(&self.board, &card) {
                let index = self.board.waste().len() - 1;
                debug!("auto_move_aces: {} -> {:?}", card, to);
                self.request_move(StackType::Waste, index, to)?;
            }
        }
        Ok(())
    }

    /// 山札が空のとき、捨て札を全部山札に戻す。
    pub fn recycle_waste(&mut self) -> Result<(), MoveRejection> {
        match self.move_system.recycle(&mut self.board) {
            Ok(command) => {
                self.commit(command);
                Ok(())
            }
            Err(reason) => Err(self.reject(reason)),
        }
    }

    /// 山札をクリックしたとき。残っていればめくる、空なら戻す。
    pub fn click_stock(&mut self) -> Result<(), MoveRejection> {
        if self.board.stock().is_empty() {
            self.recycle_waste()
        } else {
            self.draw_from_stock()
        }
    }

    /// 直前の操作を取り消す。履歴が空なら何もせず false。
    /// 手数は戻さないよ (取り消しも1手として数えたまま)。
    pub fn undo(&mut self) -> bool {
        let Some(command) = self.history.pop() else {
            return false;
        };
        self.move_system.undo(&mut self.board, &command);
        self.win_system.run(&mut self.board);
        self.events.push_back(GameEvent::MoveUndone { from: command.source(), to: command.target() });
        info!("↩️ Undo: {:?} -> {:?}", command.source(), command.target());
        true
    }

    /// 組札に上げられるカードを1枚だけ上げる。動いたら true。
    pub fn auto_complete_step(&mut self) -> bool {
        if self.board.status() != GameStatus::Active {
            return false;
        }
        let Some((from, to)) = next_auto_complete_move(&self.board) else {
            return false;
        };
        let index = self.board.pile(from).len() - 1;
        self.request_move(from, index, to).is_ok()
    }

    /// 上げられなくなるまで `auto_complete_step` を繰り返す。上げた枚数を返す。
    pub fn auto_complete(&mut self) -> usize {
        let mut moved = 0;
        while self.auto_complete_step() {
            moved += 1;
        }
        moved
    }

    /// ダブルクリック。組札、場札の順に行き先を探して動かす。動かした先を返すよ。
    pub fn smart_move(&mut self, from: StackType, index: usize) -> Result<StackType, MoveRejection> {
        if self.board.status() == GameStatus::Won {
            return Err(self.reject(MoveRejection::GameOver));
        }
        if !from.is_valid() {
            return Err(self.reject(MoveRejection::UnknownPile(from)));
        }
        let Some(to) = find_smart_move(&self.board, from, index) else {
            return Err(self.reject(MoveRejection::NoTarget { from, index }));
        };
        self.request_move(from, index, to).map(|()| to)
    }

    // --- ヒント ---

    pub fn hint(&self) -> Hint {
        hint::best_hint(&self.board)
    }

    pub fn all_hints(&self) -> Vec<MoveHint> {
        hint::all_hints(&self.board)
    }

    // --- セーブ / ロード ---

    pub fn snapshot(&self) -> SavedGame {
        self.board.to_saved(self.move_count)
    }

    pub fn save_json(&self) -> Result<String, serde_json::Error> {
        self.snapshot().to_json()
    }

    /// 保存データから復元する。失敗したらゲームはそのまま。
    /// 成功したら Undo の履歴は空になる。
    pub fn load(&mut self, saved: &SavedGame) -> Result<(), LoadError> {
        let board = Board::from_saved(saved)?;
        self.board = board;
        self.history.clear();
        self.move_count = saved.move_count;
        self.events.push_back(GameEvent::GameLoaded);
        info!("📂 セーブデータから復元しました ({} 手目)", self.move_count);
        Ok(())
    }

    pub fn load_json(&mut self, json: &str) -> Result<(), LoadError> {
        let saved = SavedGame::from_json(json)?;
        self.load(&saved)
    }

    // --- 内部 ---

    /// 成功した操作を記録して、イベントを積んで、勝ち判定する。
    fn commit(&mut self, command: Command) {
        let event = match &command {
            Command::SingleMove { card, from, to, revealed } => GameEvent::MoveAccepted {
                card: *card,
                count: 1,
                from: *from,
                to: *to,
                revealed: *revealed,
            },
            Command::SequenceMove { cards, from, to, revealed } => GameEvent::MoveAccepted {
                card: cards[0],
                count: cards.len(),
                from: *from,
                to: *to,
                revealed: *revealed,
            },
            Command::Draw { card } => GameEvent::CardDrawn { card: *card },
            Command::Recycle { count } => GameEvent::StockRecycled { count: *count },
        };
        info!(
            "✅ {:?} -> {:?} ({} 枚)",
            command.source(),
            command.target(),
            command.card_count()
        );
        self.events.push_back(event);
        self.history.push(command);
        self.move_count += 1;

        let was_won = self.board.status().is_won();
        self.win_system.run(&mut self.board);
        if !was_won && self.board.status().is_won() {
            info!("🏆 クリア！ {} 手", self.move_count);
            self.events.push_back(GameEvent::Victory { moves: self.move_count });
        }
    }

    fn reject(&mut self, reason: MoveRejection) -> MoveRejection {
        debug!("❌ 拒否: {}", reason);
        self.events.push_back(GameEvent::MoveRejected { reason: reason.clone() });
        reason
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod tests;
