use cidr_range::cidr_range::{AddressRange, CidrRecord};
use cidr_range::error::AppError;
use cidr_range::ipv4_utils::{ipv4_to_u32, to_address};
use cidr_range::summarize::{
    RangeBlocks, ipv4_summarize_range, largest_ipv4_block, summarize_addresses,
    summarize_range_with,
};
use std::net::Ipv4Addr;

fn addr(s: &str) -> Ipv4Addr {
    s.parse()
        .unwrap_or_else(|e| panic!("failed to parse {s}: {e}"))
}

fn cidrs(records: &[CidrRecord]) -> Vec<String> {
    records.iter().map(|r| r.cidr.clone()).collect()
}

/// 隙間・重複なく[first, last]を昇順で覆っていることを確認する
fn assert_exact_cover(records: &[CidrRecord], first: u32, last: u32) {
    assert!(!records.is_empty());
    assert_eq!(ipv4_to_u32(records[0].first), first);
    assert_eq!(ipv4_to_u32(records[records.len() - 1].last), last);

    let mut total = 0u64;
    for pair in records.windows(2) {
        assert_eq!(
            u64::from(ipv4_to_u32(pair[1].first)),
            u64::from(ipv4_to_u32(pair[0].last)) + 1,
            "gap or overlap between {} and {}",
            pair[0].cidr,
            pair[1].cidr
        );
    }
    for r in records {
        assert!(r.block.is_canonical(), "{} is not aligned", r.cidr);
        total += r.count;
    }
    assert_eq!(total, u64::from(last) - u64::from(first) + 1);
}

#[test]
fn largest_block_basic_cases() {
    // 0.0.0.0..=0.0.0.255 → /24
    assert_eq!(largest_ipv4_block(0, 255), 24);
    // 0.0.0.0..=0.0.1.255 → /23
    assert_eq!(largest_ipv4_block(0, 511), 23);
    // 単一アドレス → /32
    assert_eq!(largest_ipv4_block(1, 1), 32);
    // 全空間 → /0
    assert_eq!(largest_ipv4_block(0, u32::MAX), 0);
    // 境界が揃っていない場合は範囲に余裕があっても小さくなる
    assert_eq!(largest_ipv4_block(2, 1000), 31);
}

#[test]
fn summarizes_192_168_0_1_to_10() {
    let records = ipv4_summarize_range(addr("192.168.0.1"), addr("192.168.0.10"));
    assert_eq!(
        cidrs(&records),
        vec![
            "192.168.0.1/32",
            "192.168.0.2/31",
            "192.168.0.4/30",
            "192.168.0.8/31",
            "192.168.0.10/32"
        ]
    );
}

#[test]
fn summarizes_10_0_0_1_to_255() {
    let records = ipv4_summarize_range(addr("10.0.0.1"), addr("10.0.0.255"));
    assert_eq!(
        cidrs(&records),
        vec![
            "10.0.0.1/32",
            "10.0.0.2/31",
            "10.0.0.4/30",
            "10.0.0.8/29",
            "10.0.0.16/28",
            "10.0.0.32/27",
            "10.0.0.64/26",
            "10.0.0.128/25"
        ]
    );
}

#[test]
fn single_address_is_one_slash_32() {
    let records = ipv4_summarize_range(addr("1.2.3.4"), addr("1.2.3.4"));
    assert_eq!(cidrs(&records), vec!["1.2.3.4/32"]);
    assert_eq!(records[0].count, 1);
}

#[test]
fn aligned_range_is_one_block() {
    let records = ipv4_summarize_range(addr("172.16.0.0"), addr("172.31.255.255"));
    assert_eq!(cidrs(&records), vec!["172.16.0.0/12"]);
    assert_eq!(records[0].count, 1 << 20);
}

#[test]
fn reversed_arguments_give_same_result() {
    let forward = ipv4_summarize_range(addr("10.0.0.1"), addr("10.0.0.5"));
    let reversed = ipv4_summarize_range(addr("10.0.0.5"), addr("10.0.0.1"));
    assert_eq!(forward, reversed);
    assert_eq!(cidrs(&forward), vec!["10.0.0.1/32", "10.0.0.2/31", "10.0.0.4/31"]);
}

#[test]
fn whole_address_space_and_top_edge() {
    let all = ipv4_summarize_range(addr("0.0.0.0"), addr("255.255.255.255"));
    assert_eq!(cidrs(&all), vec!["0.0.0.0/0"]);
    assert_eq!(all[0].count, 1u64 << 32);

    // 255.255.255.255で終わる範囲でも停止する
    let top = ipv4_summarize_range(addr("255.255.255.254"), addr("255.255.255.255"));
    assert_eq!(cidrs(&top), vec!["255.255.255.254/31"]);

    let last = ipv4_summarize_range(addr("255.255.255.255"), addr("255.255.255.255"));
    assert_eq!(cidrs(&last), vec!["255.255.255.255/32"]);
}

#[test]
fn worst_case_range_is_bounded() {
    // 1 ..= 2^32-2 は各サイズのブロックが両側に1つずつ必要
    let records = ipv4_summarize_range(to_address(1), to_address(u32::MAX - 1));
    assert_eq!(records.len(), 62);
    assert_exact_cover(&records, 1, u32::MAX - 1);

    let records = ipv4_summarize_range(to_address(1), to_address(u32::MAX));
    assert_eq!(records.len(), 32);
    assert_exact_cover(&records, 1, u32::MAX);
}

#[test]
fn random_ranges_are_covered_exactly() {
    for _ in 0..500 {
        let a: u32 = rand::random();
        let b: u32 = rand::random();
        let (first, last) = if a <= b { (a, b) } else { (b, a) };

        let records = ipv4_summarize_range(to_address(a), to_address(b));
        assert_exact_cover(&records, first, last);
        assert!(records.len() <= 62);
    }
}

#[test]
fn random_small_ranges_are_covered_exactly() {
    for _ in 0..500 {
        let first: u32 = rand::random::<u32>() >> 1;
        let last = first + rand::random::<u16>() as u32;
        let records = ipv4_summarize_range(to_address(first), to_address(last));
        assert_exact_cover(&records, first, last);
    }
}

#[test]
fn emitter_receives_blocks_in_order() {
    let mut seen = Vec::new();
    summarize_range_with(addr("192.168.0.10"), addr("192.168.0.1"), |record| {
        seen.push(record.cidr)
    });
    assert_eq!(
        seen,
        vec![
            "192.168.0.1/32",
            "192.168.0.2/31",
            "192.168.0.4/30",
            "192.168.0.8/31",
            "192.168.0.10/32"
        ]
    );
}

#[test]
fn range_blocks_iterator_streams_canonical_blocks() {
    let range = AddressRange::new(addr("10.0.0.0"), addr("10.0.2.127"));
    let blocks: Vec<String> = RangeBlocks::new(range).map(|b| b.to_string()).collect();
    assert_eq!(blocks, vec!["10.0.0.0/23", "10.0.2.0/25"]);
}

#[test]
fn summarize_addresses_validates_ipv4_only() -> Result<(), AppError> {
    let records = summarize_addresses("10.0.0.0", "10.0.0.3")?;
    assert_eq!(cidrs(&records), vec!["10.0.0.0/30"]);

    assert!(matches!(
        summarize_addresses("10.0.0.1", "::1"),
        Err(AppError::InvalidAddress(t)) if t == "::1"
    ));
    assert!(matches!(
        summarize_addresses("10.0.0.300", "10.0.0.1"),
        Err(AppError::InvalidAddress(t)) if t == "10.0.0.300"
    ));
    Ok(())
}

#[test]
fn range_blocks_iterator_runs_to_end_of_address_space() {
    // 末尾の/32まで途中で止まらずに列挙し、その後はNoneを返す
    let range = AddressRange::new(to_address(1), to_address(u32::MAX));
    let mut blocks = RangeBlocks::new(range);
    let collected: Vec<_> = blocks.by_ref().collect();
    assert_eq!(collected.len(), 32);
    assert_eq!(collected[0].to_string(), "0.0.0.1/32");
    assert_eq!(collected[31].to_string(), "128.0.0.0/1");
    assert!(collected.iter().all(|b| b.is_canonical()));
    assert!(blocks.next().is_none());

    let mut single = RangeBlocks::new(AddressRange::new(to_address(u32::MAX), to_address(u32::MAX)));
    assert_eq!(
        single.next().map(|b| b.to_string()),
        Some("255.255.255.255/32".to_string())
    );
    assert!(single.next().is_none());
}
