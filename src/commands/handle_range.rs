use crate::common::{OutputFormat, debug_log};
use crate::error::AppError;
use crate::output::write_records;
use crate::summarize::summarize_addresses;
use std::io::Write;

/// 先頭/末尾アドレスを受け取り、範囲を覆う最小のCIDR列を書き出す
pub fn run_range<W: Write>(
    out: &mut W,
    first: &str,
    last: &str,
    output_format: OutputFormat,
) -> Result<(), AppError> {
    let records = summarize_addresses(first, last)?;
    debug_log(format!("{} block(s) found", records.len()));
    write_records(out, &records, output_format)
}
