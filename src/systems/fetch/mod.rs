mod commands;
mod downloads;
mod worker;

pub(crate) use commands::{FetchCommand, FetchResult};
pub use downloads::download_export;
pub(crate) use worker::spawn;
