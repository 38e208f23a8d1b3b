// src/timer.rs
//! プレイ時間を測るタイマー ⏱️
//! 時計は自分で読まないよ。いつも呼ぶ側から `Instant` をもらう。

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct GameTimer {
    /// 一時停止までにたまった時間。
    accumulated: Duration,
    /// 動いているなら、動き出した時刻。
    running_since: Option<Instant>,
}

impl GameTimer {
    /// 止まった状態で作る。
    pub fn new() -> Self {
        Self::default()
    }

    /// 動かす。もう動いているなら何もしない。
    pub fn start(&mut self, now: Instant) {
        if self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    /// 止める。それまでの時間はためておく。
    pub fn pause(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += now.saturating_duration_since(since);
        }
    }

    /// 0 に戻して止める。
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_paused(&self) -> bool {
        self.running_since.is_none()
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.running_since {
            Some(since) => self.accumulated + now.saturating_duration_since(since),
            None => self.accumulated,
        }
    }

    /// "MM:SS" 形式。60分を超えたら分がそのまま増えていく。
    pub fn formatted(&self, now: Instant) -> String {
        let secs = self.elapsed(now).as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_starts_paused_at_zero() {
        let timer = GameTimer::new();
        let now = Instant::now();
        assert!(timer.is_paused());
        assert_eq!(timer.elapsed(now), Duration::ZERO);
        assert_eq!(timer.formatted(now), "00:00");
    }

    #[test]
    fn pause_keeps_accumulated_time() {
        let t0 = Instant::now();
        let mut timer = GameTimer::new();
        timer.start(t0);
        timer.start(t0 + Duration::from_secs(30)); // 二重スタートは無視
        timer.pause(t0 + Duration::from_secs(65));
        assert_eq!(timer.elapsed(t0 + Duration::from_secs(500)), Duration::from_secs(65));
        assert_eq!(timer.formatted(t0 + Duration::from_secs(500)), "01:05");

        timer.start(t0 + Duration::from_secs(100));
        assert_eq!(timer.elapsed(t0 + Duration::from_secs(110)), Duration::from_secs(75));

        timer.reset();
        assert!(timer.is_paused());
        assert_eq!(timer.elapsed(t0 + Duration::from_secs(110)), Duration::ZERO);
    }

    #[test]
    fn long_games_keep_counting_minutes() {
        let t0 = Instant::now();
        let mut timer = GameTimer::new();
        timer.start(t0);
        assert_eq!(timer.formatted(t0 + Duration::from_secs(3_725)), "62:05");
    }
}
