pub mod cidr_range;
pub mod cli;
pub mod common;
pub mod constants;
pub mod error;
pub mod ipv4_utils;
pub mod output;
pub mod output_common;
pub mod summarize;

pub mod commands {
    pub mod handle_cidr;
    pub mod handle_range;
}
