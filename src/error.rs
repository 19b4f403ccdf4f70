use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // CIDR表記が不正 (書式エラー、プレフィックス長が0-32の範囲外など)
    #[error("invalid CIDR block: {0}")]
    InvalidCidr(String),

    // IPv4アドレスとして解釈できない入力
    #[error("invalid IPv4 address: {0}")]
    InvalidAddress(String),

    // 出力まわりのI/Oエラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // JSON出力のシリアライズ失敗
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
