pub mod config;
pub mod dkms;
pub mod error;
pub mod extract;
pub mod patches;
pub mod reader;
pub mod rules;
pub mod summary;

pub use config::SummarizeConfig;
pub use error::{SummarizeError, SummarizeResult};
pub use summary::{summarize_log, SummaryRecord};
