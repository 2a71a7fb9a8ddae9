/* src/error.rs */

use thiserror::Error;

/// Result type alias for operations that may fail with `AddrError`.
pub type Result<T> = std::result::Result<T, AddrError>;

/// Errors returned by the address/integer conversions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AddrError {
    /// The input does not parse as an IPv4 address.
    #[error("Invalid IPv4 address: {0:?}")]
    InvalidAddress(String),

    /// The integer does not fit in 32 bits.
    #[error("Value {0} is out of the IPv4 range")]
    OutOfRange(u64),
}
