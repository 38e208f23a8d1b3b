// src/logic/mod.rs
//! ゲームのルールや判断のロジックをまとめるモジュールだよ！🧠
//! ここにあるのは盤面を読むだけの関数と、操作の記録 (`Command`)。書き換えは systems の仕事。

pub mod auto_move;
pub mod command;
pub mod deck;
pub mod hint;
pub mod rules;
