use crate::constants::{DEBUG_ENV, TIMESTAMP_FORMAT};
use chrono::Local;
use once_cell::sync::OnceCell;

/// 出力形式を管理するためのenum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Txt,
    Json,
    Nft,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "nft" => OutputFormat::Nft,
            _ => OutputFormat::Txt, // デフォルトは Txt
        }
    }
}

static DEBUG_ENABLED: OnceCell<bool> = OnceCell::new();

/// デバッグ出力の有効/無効を一度だけ決める。
/// フラグが無くても環境変数が設定されていれば有効。
pub fn init_debug(flag: bool) {
    let enabled = flag || std::env::var_os(DEBUG_ENV).is_some();
    let _ = DEBUG_ENABLED.set(enabled);
}

pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var_os(DEBUG_ENV).is_some())
}

/// デバッグ有効時のみstderrへ出力する
pub fn debug_log<S: AsRef<str>>(msg: S) {
    if debug_enabled() {
        let now_str = Local::now().format(TIMESTAMP_FORMAT);
        eprintln!("[debug {}] {}", now_str, msg.as_ref());
    }
}
