use clap::Parser;

/// CLIの定義
#[derive(Parser, Debug)]
#[command(
    name = "cidr",
    author,
    version,
    about = "Calculates the first and last IP of a CIDR block, or the minimal list of CIDRs for an IP range.",
    after_help = "cidr <CIDR>: Calculates the first and last IP in a CIDR range.\n\ncidr <First-IP> <Last-IP>: Calculates the minimal number of CIDRs to express the given range."
)]
pub struct Cli {
    #[arg(
        value_name = "CIDR | FIRST-IP LAST-IP",
        required = true,
        num_args = 1..=2,
        help = "Either one CIDR block (e.g. 10.0.0.0/24) or two IPv4 addresses.\nExample: 192.168.0.1 192.168.0.10"
    )]
    pub targets: Vec<String>,

    #[arg(
        short = 'f',
        long = "format",
        default_value = "txt",
        required = false,
        hide_default_value = true,
        help = "Select output format: 'txt', 'json' or 'nft'.\ndefault: txt"
    )]
    pub output_format: String,

    #[arg(
        short = 'd',
        long = "debug",
        default_value = "false",
        help = "Print debug logs to stderr (same as setting CIDR_RANGE_DEBUG)."
    )]
    pub debug: bool,
}
