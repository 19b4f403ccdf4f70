use cidr_range::cli::Cli;
use cidr_range::commands::{handle_cidr::run_cidr, handle_range::run_range};
use cidr_range::common::{OutputFormat, debug_log, init_debug};
use cidr_range::error::AppError;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    // 引数の数が不正な場合はclapが使い方を表示して終了コード2で終了する
    let args = Cli::parse();
    init_debug(args.debug);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::from(1)
        }
    }
}

/// 入力検証エラーはモードごとのメッセージで表示する
fn report_error(e: &AppError) {
    match e {
        AppError::InvalidCidr(_) => eprintln!("Invalid CIDR notation: {}", e),
        AppError::InvalidAddress(_) => eprintln!("Invalid IP addresses provided: {}", e),
        _ => eprintln!("Error: {}", e),
    }
}

/// アプリケーションのメインロジック
fn run(args: &Cli) -> Result<(), AppError> {
    let output_format = OutputFormat::from_str(&args.output_format);
    debug_log(format!("targets={:?} format={:?}", args.targets, output_format));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.targets.as_slice() {
        [cidr] => run_cidr(&mut out, cidr, output_format),
        [first, last] => run_range(&mut out, first, last, output_format),
        _ => Cli::command()
            .error(
                ErrorKind::WrongNumberOfValues,
                "expected either <CIDR> or <First-IP> <Last-IP>",
            )
            .exit(),
    }
}
