//! 任意のIPv4範囲を、過不足なく覆う最小のCIDRブロック列に分割する。

use crate::cidr_range::{AddressRange, CidrBlock, CidrRecord, prefix_mask};
use crate::common::debug_log;
use crate::constants::IPV4_BITS;
use crate::error::AppError;
use crate::ipv4_utils::{ipv4_to_u32, parse_ipv4};
use std::net::Ipv4Addr;

/// currentから始まりendを超えない最大のブロックのプレフィックス長を返す。
/// /0から順に試し、境界が揃っていてendをはみ出さない最初の長さを採用する。
pub fn largest_ipv4_block(current: u32, end: u32) -> u8 {
    debug_assert!(current <= end, "current must be <= end");

    for prefix_len in 0..IPV4_BITS {
        let mask = prefix_mask(prefix_len);
        if current & mask == current && current | !mask <= end {
            return prefix_len;
        }
    }
    // /32は常に条件を満たす
    IPV4_BITS
}

/// 正規化済み範囲のCIDRブロックを昇順に1つずつ返すイテレータ
#[derive(Debug, Clone)]
pub struct RangeBlocks {
    // 255.255.255.255の次へ進んでもオーバーフローしないようu64で持つ
    current: u64,
    end: u64,
}

impl RangeBlocks {
    pub fn new(range: AddressRange) -> Self {
        Self {
            current: u64::from(ipv4_to_u32(range.first())),
            end: u64::from(ipv4_to_u32(range.last())),
        }
    }
}

impl Iterator for RangeBlocks {
    type Item = CidrBlock;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current > self.end {
            return None;
        }

        // endは常にu32の範囲内、currentはend以下なのでキャストは安全
        let current = self.current as u32;
        let prefix_len = largest_ipv4_block(current, self.end as u32);
        let block = CidrBlock::from_parts(current, prefix_len);
        self.current += block.size();
        Some(block)
    }
}

/// 範囲[first, last]を分割し、見つかったブロックを順にemitへ渡す。
/// 引数が逆順でも入れ替えてから処理する。
pub fn summarize_range_with<F>(first: Ipv4Addr, last: Ipv4Addr, mut emit: F)
where
    F: FnMut(CidrRecord),
{
    let range = AddressRange::new(first, last);
    debug_log(format!(
        "summarizing {}-{} ({} addresses)",
        range.first(),
        range.last(),
        range.size()
    ));

    for block in RangeBlocks::new(range) {
        emit(CidrRecord::from_block(block));
    }
}

/// IPv4の範囲[first, last]をCIDRの最小セットにまとめる。
pub fn ipv4_summarize_range(first: Ipv4Addr, last: Ipv4Addr) -> Vec<CidrRecord> {
    let mut records = Vec::new();
    summarize_range_with(first, last, |record| records.push(record));
    records
}

/// 文字列で渡された2つのアドレスを検証してから分割する。IPv4のみ受け付ける。
pub fn summarize_addresses(first: &str, last: &str) -> Result<Vec<CidrRecord>, AppError> {
    let first_addr = parse_ipv4(first)?;
    let last_addr = parse_ipv4(last)?;
    Ok(ipv4_summarize_range(first_addr, last_addr))
}
