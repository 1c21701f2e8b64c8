use num_bigint::ParseBigIntError;

/// Errors produced while converting, encoding or decoding.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing decimal number")]
    EmptyInput,

    /// Only non-negative integers have a binary digit string here.
    #[error("negative number {0:?} has no unsigned binary representation")]
    NegativeInput(String),

    #[error("invalid decimal number {0:?}")]
    MalformedDecimal(String),

    #[error("invalid decimal number {input:?}: {source}")]
    InvalidDecimal {
        input: String,
        source: ParseBigIntError,
    },

    #[error("not a binary digit string: {0:?}")]
    InvalidBinary(String),

    #[error("invalid hex payload: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("invalid ABI payload: {0}")]
    Abi(#[from] alloy_sol_types::Error),

    #[error("clipboard {action}: {source}")]
    Clipboard {
        action: &'static str,
        source: arboard::Error,
    },

    #[error(transparent)]
    Cli(#[from] clap::Error),
}
