use crate::cidr_range::expand_cidr;
use crate::common::{OutputFormat, debug_log};
use crate::error::AppError;
use crate::output::write_records;
use std::io::Write;

/// CIDR 1つを受け取り、先頭/末尾アドレスとアドレス数を書き出す
pub fn run_cidr<W: Write>(
    out: &mut W,
    cidr: &str,
    output_format: OutputFormat,
) -> Result<(), AppError> {
    let record = expand_cidr(cidr)?;
    debug_log(format!(
        "expanded {} (canonical: {})",
        record.cidr,
        record.block.is_canonical()
    ));
    write_records(out, &[record], output_format)
}
