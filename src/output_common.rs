use crate::cidr_range::CidrRecord;

/// 3桁ごとにカンマを入れた文字列を返す (負数は先頭に'-')
pub fn format_with_commas(number: i64) -> String {
    let digits = number.unsigned_abs().to_string();
    let len = digits.len();

    let mut result = String::with_capacity(len + (len - 1) / 3 + 1);
    if number < 0 {
        result.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(digit);
    }
    result
}

/// "10.0.0.0/24: 10.0.0.0-10.0.0.255 (256 addresses)" 形式の1行
pub fn format_range(record: &CidrRecord) -> String {
    let plurality = if record.count == 1 { "" } else { "es" };
    // 2^32はi64に収まる
    format!(
        "{}: {}-{} ({} address{})",
        record.cidr,
        record.first,
        record.last,
        format_with_commas(record.count as i64),
        plurality
    )
}

/// 汎用ヘッダー生成
pub fn make_header(now_str: &str) -> String {
    format!("# Generated at: {}\n\n", now_str)
}

/// TXT出力用の共通ヘルパー
pub fn render_txt(records: &[CidrRecord]) -> String {
    records
        .iter()
        .map(|record| format!("{}\n", format_range(record)))
        .collect()
}

/// JSON出力用の共通ヘルパー
pub fn render_json(records: &[CidrRecord]) -> Result<String, serde_json::Error> {
    let mut body = serde_json::to_string_pretty(records)?;
    body.push('\n');
    Ok(body)
}

/// NFT 出力用の共通ヘルパー
pub fn render_nft(records: &[CidrRecord], define_name: &str, header: &str) -> String {
    let mut content = String::new();
    content.push_str(header);
    content.push_str(&format!("define {} {{\n", define_name));
    for record in records {
        content.push_str(&format!("    {},\n", record.cidr));
    }
    content.push_str("}\n");
    content
}
