pub mod cli;
mod command;
mod error;
pub mod forge;
pub mod release;

pub use command::find_latest_tag;
pub use error::{Result, TagFinderError};

#[cfg(test)]
pub mod test_helpers;
