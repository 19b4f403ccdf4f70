/// 定数の共通化

/// IPv4アドレスのビット幅
pub const IPV4_BITS: u8 = 32;

/// この環境変数が設定されているとdebug_logを出力する
pub const DEBUG_ENV: &str = "CIDR_RANGE_DEBUG";

/// nft出力で使うdefine名
pub const NFT_DEFINE_NAME: &str = "cidr_range";

/// ヘッダーやログのタイムスタンプ書式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
