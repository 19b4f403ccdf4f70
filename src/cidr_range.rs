use crate::constants::IPV4_BITS;
use crate::error::AppError;
use crate::ipv4_utils::{ipv4_to_u32, parse_ipv4, to_address};
use ipnet::Ipv4Net;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// 上位prefix_lenビットが立ったネットマスクを返す。/0は0。
pub fn prefix_mask(prefix_len: u8) -> u32 {
    u32::MAX
        .checked_shl(u32::from(IPV4_BITS.saturating_sub(prefix_len)))
        .unwrap_or(0)
}

/// ベースアドレスとプレフィックス長の組。
/// ベースがマスク境界に揃っているものを「正規」ブロックと呼ぶ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CidrBlock {
    base: u32,
    prefix_len: u8,
}

impl CidrBlock {
    pub fn new(base: u32, prefix_len: u8) -> Result<Self, AppError> {
        if prefix_len > IPV4_BITS {
            return Err(AppError::InvalidCidr(format!(
                "{}/{}",
                to_address(base),
                prefix_len
            )));
        }
        Ok(Self { base, prefix_len })
    }

    /// prefix_lenが0..=32であることを呼び出し側が保証する場合に使う
    pub(crate) fn from_parts(base: u32, prefix_len: u8) -> Self {
        debug_assert!(prefix_len <= IPV4_BITS, "prefix_len must be <= 32");
        Self { base, prefix_len }
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn mask(&self) -> u32 {
        prefix_mask(self.prefix_len)
    }

    pub fn is_canonical(&self) -> bool {
        self.base & self.mask() == self.base
    }

    /// ブロック内のアドレス数 (1 ..= 2^32)
    pub fn size(&self) -> u64 {
        1u64 << (IPV4_BITS - self.prefix_len)
    }

    /// ブロックの先頭/末尾アドレスを計算する
    pub fn expand(&self) -> AddressRange {
        let mask = self.mask();
        AddressRange {
            first: to_address(self.base & mask),
            last: to_address(self.base | !mask),
        }
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", to_address(self.base), self.prefix_len)
    }
}

/// 両端を含む連続したアドレス範囲。常にfirst <= last。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    first: Ipv4Addr,
    last: Ipv4Addr,
}

impl AddressRange {
    /// 逆順で渡された場合は入れ替えて正規化する
    pub fn new(a: Ipv4Addr, b: Ipv4Addr) -> Self {
        if ipv4_to_u32(a) > ipv4_to_u32(b) {
            Self { first: b, last: a }
        } else {
            Self { first: a, last: b }
        }
    }

    pub fn first(&self) -> Ipv4Addr {
        self.first
    }

    pub fn last(&self) -> Ipv4Addr {
        self.last
    }

    /// 表示用のアドレス数。全空間でも2^32なのでu64に収まる。
    pub fn size(&self) -> u64 {
        u64::from(ipv4_to_u32(self.last)) - u64::from(ipv4_to_u32(self.first)) + 1
    }
}

/// 呼び出し側へ返す1ブロック分の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CidrRecord {
    pub cidr: String,
    pub first: Ipv4Addr,
    pub last: Ipv4Addr,
    pub count: u64,
    #[serde(skip)]
    pub block: CidrBlock,
}

impl CidrRecord {
    pub fn from_block(block: CidrBlock) -> Self {
        Self::with_text(block.to_string(), block)
    }

    /// cidrの表記を呼び出し側の入力のまま残す場合に使う
    pub fn with_text(cidr: String, block: CidrBlock) -> Self {
        let range = block.expand();
        Self {
            cidr,
            first: range.first(),
            last: range.last(),
            count: block.size(),
            block,
        }
    }
}

/// "a.b.c.d/n" をパースする。ホストビットはそのまま保持する。
/// アドレス部はparse_ipv4と同じ規則で検証する (先頭ゼロ付きオクテットは不可)。
pub fn parse_cidr(text: &str) -> Result<CidrBlock, AppError> {
    let invalid = || AppError::InvalidCidr(text.to_string());
    let trimmed = text.trim();

    let (addr_part, _) = trimmed.split_once('/').ok_or_else(invalid)?;
    parse_ipv4(addr_part).map_err(|_| invalid())?;

    let net = trimmed.parse::<Ipv4Net>().map_err(|_| invalid())?;
    CidrBlock::new(ipv4_to_u32(net.addr()), net.prefix_len())
}

/// CIDR文字列をパースして範囲を計算する。cidrには入力文字列をそのまま入れる。
pub fn expand_cidr(text: &str) -> Result<CidrRecord, AppError> {
    let block = parse_cidr(text)?;
    Ok(CidrRecord::with_text(text.trim().to_string(), block))
}
