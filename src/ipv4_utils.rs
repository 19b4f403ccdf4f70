use crate::error::AppError;
use std::net::Ipv4Addr;

/// 4オクテットをビッグエンディアンのu32に変換する。
/// オクテット数が4でなければInvalidAddressを返す。
pub fn to_integer(octets: &[u8]) -> Result<u32, AppError> {
    match octets {
        [o0, o1, o2, o3] => {
            Ok((*o0 as u32) << 24 | (*o1 as u32) << 16 | (*o2 as u32) << 8 | *o3 as u32)
        }
        _ => Err(AppError::InvalidAddress(format!(
            "expected 4 octets, got {:?}",
            octets
        ))),
    }
}

/// 型付きのIPv4アドレスをu32へ (失敗しない)
pub fn ipv4_to_u32(addr: Ipv4Addr) -> u32 {
    u32::from_be_bytes(addr.octets())
}

/// u32をIPv4アドレスへ。to_integerの逆変換。
pub fn to_address(value: u32) -> Ipv4Addr {
    Ipv4Addr::from(value.to_be_bytes())
}

/// ドット区切り10進表記のIPv4アドレスをパースする。
/// IPv6リテラルを含め、IPv4として読めないものはInvalidAddressになる。
pub fn parse_ipv4(text: &str) -> Result<Ipv4Addr, AppError> {
    text.trim()
        .parse::<Ipv4Addr>()
        .map_err(|_| AppError::InvalidAddress(text.to_string()))
}
