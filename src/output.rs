use crate::cidr_range::CidrRecord;
use crate::common::{OutputFormat, debug_log};
use crate::constants::{NFT_DEFINE_NAME, TIMESTAMP_FORMAT};
use crate::error::AppError;
use crate::output_common::{make_header, render_json, render_nft, render_txt};
use chrono::Local;
use std::io::Write;

/// 計算結果を指定形式で書き出す
pub fn write_records<W: Write>(
    out: &mut W,
    records: &[CidrRecord],
    format_enum: OutputFormat,
) -> Result<(), AppError> {
    let content = match format_enum {
        OutputFormat::Txt => render_txt(records),
        OutputFormat::Json => render_json(records)?,
        OutputFormat::Nft => {
            let now_str = Local::now().format(TIMESTAMP_FORMAT).to_string();
            let header = make_header(&now_str);
            render_nft(records, NFT_DEFINE_NAME, &header)
        }
    };

    out.write_all(content.as_bytes())?;
    out.flush()?;
    debug_log(format!(
        "[output] wrote {} block(s) as {:?}",
        records.len(),
        format_enum
    ));
    Ok(())
}
