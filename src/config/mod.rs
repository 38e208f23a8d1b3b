// src/config/mod.rs
//! 設定まわり。レイアウト定数と、ホストから渡されるゲーム設定。

pub mod layout;

use serde::{Deserialize, Serialize};

/// ゲームの実行時設定だよ。
///
/// グローバルな設定マネージャーは持たない。ホストが JSON とかから読んで
/// `Game::new` に渡す。書かれていない項目はデフォルト値になる。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 配りのシード。None なら毎回ランダム。
    pub seed: Option<u64>,
    /// 山札からめくったエースを自動で空いている組札に送るか。
    pub auto_move_aces: bool,
}

impl GameConfig {
    /// シード固定の設定を作る。テストやリプレイ用。
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    /// JSON 文字列から設定を読む。
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = GameConfig::from_json("{}").expect("empty object is a valid config");
        assert_eq!(config, GameConfig::default());
        assert!(!config.auto_move_aces);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn reads_all_fields() {
        let config = GameConfig::from_json(r#"{"seed": 42, "auto_move_aces": true}"#)
            .expect("config should parse");
        assert_eq!(config.seed, Some(42));
        assert!(config.auto_move_aces);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(GameConfig::from_json(r#"{"seed": "abc"}"#).is_err());
    }
}
