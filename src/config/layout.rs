// src/config/layout.rs
//! 山の配置とカードの重なり具合に関する定数だよ！
//! ルール判定には使わない。描画とクリック判定のためだけ。

pub const CARD_WIDTH: f32 = 79.0; // カードの見た目の幅
pub const CARD_HEIGHT: f32 = 123.0; // カードの見た目の高さ

// --- 各エリアの基準位置 (左上) ---
pub const STOCK_POS_X: f32 = 50.0;
pub const STOCK_POS_Y: f32 = 50.0;

pub const WASTE_POS_X: f32 = 150.0;
pub const WASTE_POS_Y: f32 = 50.0;

pub const FOUNDATION_START_X: f32 = 350.0;
pub const FOUNDATION_START_Y: f32 = 50.0;
pub const FOUNDATION_X_OFFSET: f32 = 100.0; // 組札どうしの間隔

pub const TABLEAU_START_X: f32 = 50.0;
pub const TABLEAU_START_Y: f32 = 200.0;
pub const TABLEAU_X_OFFSET: f32 = 100.0; // 場札の列の間隔

// --- 山の中でのカードのずらし方 ---
pub const WASTE_FAN_X_OFFSET: f32 = 20.0; // 捨て札は2枚目以降を少し右へ
pub const TABLEAU_CASCADE_Y_OFFSET: f32 = 30.0; // 場札は1枚ごとに下へ
