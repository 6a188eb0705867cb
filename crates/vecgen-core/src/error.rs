//! Error types for vecgen, one enum per subsystem: value allocation and
//! memory emulation.

use std::error::Error;
use std::fmt;

use crate::config::ConfigError;

/// Errors from the unique-value allocators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The configuration passed to the allocator failed validation.
    InvalidConfig(ConfigError),
    /// More unique values were requested than the pool can supply.
    PoolExhausted {
        /// Number of unique values requested.
        requested: u64,
        /// Number of distinct values in the pool.
        available: u64,
    },
    /// The rejection-sampling draw budget ran out before enough unique
    /// values were collected.
    AttemptsExhausted {
        /// Number of unique values requested.
        requested: u64,
        /// Number of unique values collected before giving up.
        allocated: u64,
        /// Number of draws made.
        attempts: u64,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(e) => write!(f, "invalid generator config: {e}"),
            Self::PoolExhausted {
                requested,
                available,
            } => write!(
                f,
                "pool exhausted: requested {requested} unique values, only {available} available"
            ),
            Self::AttemptsExhausted {
                requested,
                allocated,
                attempts,
            } => write!(
                f,
                "allocation gave up after {attempts} draws: {allocated}/{requested} unique values"
            ),
        }
    }
}

impl Error for AllocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for AllocError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}

/// Errors from emulated memory accesses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemoryError {
    /// An access fell outside the memory image.
    ///
    /// Indicates a misconfigured test (bad stride, offset or base) and
    /// must be surfaced to the caller.
    OutOfRange {
        /// Absolute address of the access.
        address: i64,
        /// Width of the access in bytes.
        len: usize,
        /// Absolute address of the first byte of the image.
        base: u32,
        /// Size of the image in bytes.
        size: usize,
    },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                address,
                len,
                base,
                size,
            } => write!(
                f,
                "{len}-byte access at {address:#x} outside memory image \
                 [{base:#x}, {:#x})",
                u64::from(*base) + *size as u64
            ),
        }
    }
}

impl Error for MemoryError {}
