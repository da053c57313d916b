//! Gist logs.
//!
//! - [`reader`] - Input logs of gist ids
//! - [`writer`] - Fetch and conceal reports

pub mod reader;
pub mod writer;

pub use reader::{parse_gist_ids, read_input_log};
pub use writer::{
    format_conceal_report, format_fetch_report, format_gist, format_incomplete_pair, format_pair,
    report_header, write_report,
};
