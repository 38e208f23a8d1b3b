// src/score.rs
//! 得点計算！🏅 ゲーム本体は点数を知らない。`GameEvent` を眺めて数えるだけの係。

use std::time::Duration;

use crate::components::card::Card;
use crate::components::stack::PileKind;
use crate::protocol::GameEvent;

/// 1手ごとの点数と、クリア時のボーナスの決め方。
pub trait ScorePolicy {
    fn points_for_move(&self, card: &Card, from: PileKind, to: PileKind) -> i32;
    fn completion_bonus(&self, elapsed: Duration) -> i32;
}

/// いちばん普通の点数表。
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScoring;

impl StandardScoring {
    /// ボーナスの分子。速く終わるほど増える。
    const TIME_BONUS_NUMERATOR: u64 = 700_000;
    const MAX_TIME_BONUS: u64 = 1_000;
}

impl ScorePolicy for StandardScoring {
    fn points_for_move(&self, _card: &Card, from: PileKind, to: PileKind) -> i32 {
        match (from, to) {
            (PileKind::Waste, PileKind::Tableau) => 5,
            (PileKind::Waste, PileKind::Foundation) => 10,
            (PileKind::Tableau, PileKind::Foundation) => 10,
            (PileKind::Tableau, PileKind::Tableau) => 5,
            (PileKind::Foundation, PileKind::Tableau) => -15,
            _ => 0,
        }
    }

    fn completion_bonus(&self, elapsed: Duration) -> i32 {
        let secs = elapsed.as_secs().max(1);
        let bonus = (Self::TIME_BONUS_NUMERATOR / secs).min(Self::MAX_TIME_BONUS);
        // MAX_TIME_BONUS 以下なので必ず収まる
        i32::try_from(bonus).unwrap_or(i32::MAX)
    }
}

/// 点数を持っておく係。イベントを渡すと加算していく。
#[derive(Debug, Clone, Default)]
pub struct ScoreKeeper<P: ScorePolicy = StandardScoring> {
    policy: P,
    score: i32,
    bonus_awarded: bool,
}

impl ScoreKeeper<StandardScoring> {
    pub fn standard() -> Self {
        Self::new(StandardScoring)
    }
}

impl<P: ScorePolicy> ScoreKeeper<P> {
    pub fn new(policy: P) -> Self {
        Self { policy, score: 0, bonus_awarded: false }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn record_move(&mut self, card: &Card, from: PileKind, to: PileKind) -> i32 {
        let points = self.policy.points_for_move(card, from, to);
        self.score += points;
        points
    }

    /// イベントを1つ反映する。点数に関係ないイベントは無視。
    /// 新しいゲームが始まったら (`GameReset` / `GameLoaded`) 0点に戻すよ。
    pub fn observe(&mut self, event: &GameEvent) {
        match event {
            GameEvent::MoveAccepted { card, from, to, .. } => {
                self.record_move(card, from.kind(), to.kind());
            }
            GameEvent::GameReset | GameEvent::GameLoaded => self.reset(),
            _ => {}
        }
    }

    pub fn observe_all<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) {
        for event in events {
            self.observe(event);
        }
    }

    /// クリアボーナスを足す。1ゲームにつき1回だけ。
    pub fn award_completion_bonus(&mut self, elapsed: Duration) -> i32 {
        if self.bonus_awarded {
            return 0;
        }
        self.bonus_awarded = true;
        let bonus = self.policy.completion_bonus(elapsed);
        self.score += bonus;
        bonus
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.bonus_awarded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::components::stack::StackType;

    fn accepted(from: StackType, to: StackType) -> GameEvent {
        GameEvent::MoveAccepted {
            card: Card::face_up(Suit::Spade, Rank::Five),
            count: 1,
            from,
            to,
            revealed: false,
        }
    }

    #[test]
    fn standard_table() {
        let card = Card::face_up(Suit::Heart, Rank::Two);
        let policy = StandardScoring;
        assert_eq!(policy.points_for_move(&card, PileKind::Waste, PileKind::Tableau), 5);
        assert_eq!(policy.points_for_move(&card, PileKind::Waste, PileKind::Foundation), 10);
        assert_eq!(policy.points_for_move(&card, PileKind::Tableau, PileKind::Foundation), 10);
        assert_eq!(policy.points_for_move(&card, PileKind::Tableau, PileKind::Tableau), 5);
        assert_eq!(policy.points_for_move(&card, PileKind::Foundation, PileKind::Tableau), -15);
        assert_eq!(policy.points_for_move(&card, PileKind::Stock, PileKind::Waste), 0);
    }

    #[test]
    fn completion_bonus_is_capped() {
        let policy = StandardScoring;
        assert_eq!(policy.completion_bonus(Duration::from_secs(0)), 1_000);
        assert_eq!(policy.completion_bonus(Duration::from_secs(700)), 1_000);
        assert_eq!(policy.completion_bonus(Duration::from_secs(1_400)), 500);
        assert_eq!(policy.completion_bonus(Duration::from_secs(800_000)), 0);
    }

    #[test]
    fn keeper_folds_events() {
        let mut keeper = ScoreKeeper::standard();
        keeper.observe_all(&[
            accepted(StackType::Waste, StackType::Tableau(2)),
            accepted(StackType::Tableau(2), StackType::Foundation(0)),
            GameEvent::CardDrawn { card: Card::face_up(Suit::Club, Rank::Nine) },
            accepted(StackType::Foundation(0), StackType::Tableau(1)),
        ]);
        assert_eq!(keeper.score(), 0);

        keeper.observe(&accepted(StackType::Waste, StackType::Foundation(1)));
        assert_eq!(keeper.score(), 10);

        assert_eq!(keeper.award_completion_bonus(Duration::from_secs(1_400)), 500);
        assert_eq!(keeper.award_completion_bonus(Duration::from_secs(1_400)), 0);
        assert_eq!(keeper.score(), 510);

        keeper.observe(&GameEvent::GameReset);
        assert_eq!(keeper.score(), 0);
    }
}
