// src/components/position.rs

use serde::{Deserialize, Serialize};

use crate::config::layout::{CARD_HEIGHT, CARD_WIDTH};

/// 2D空間での位置だよ！📍
///
/// ルールエンジン自体は座標を気にしない。描画側とクリック判定 (`Pile::hit_test`)
/// のためだけに持っている。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// 2つの位置を足し合わせる (山の基準位置 + カードごとのオフセット)。
    pub fn offset_by(self, offset: Position) -> Position {
        Position::new(self.x + offset.x, self.y + offset.y)
    }

    /// この位置を左上とするカード1枚分の矩形に `point` が入っているか。
    pub fn card_contains(self, point: Position) -> bool {
        point.x >= self.x
            && point.x <= self.x + CARD_WIDTH
            && point.y >= self.y
            && point.y <= self.y + CARD_HEIGHT
    }
}
