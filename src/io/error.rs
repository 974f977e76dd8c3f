//! Failures while mapping an input file.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    /// The file is larger than `IOLimits::max_file_size`.
    #[error("file is {found} bytes, over the {limit} byte input limit")]
    FileTooLarge { limit: u64, found: u64 },

    #[error("cannot open file ({0})")]
    Open(#[source] std::io::Error),

    #[error("cannot map file ({0})")]
    Map(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IoError>;
