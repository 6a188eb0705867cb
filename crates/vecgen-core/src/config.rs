//! Generator configuration and validation.
//!
//! [`GenConfig`] is the input for constructing a generator.
//! [`validate()`](GenConfig::validate) checks it before any RNG is seeded.

use std::error::Error;
use std::fmt;

/// Highest register index the allocators may hand out.
pub const MAX_REGISTER: u8 = 27;

/// Configuration for a test-input generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenConfig {
    /// Seed for the generator's RNG. Default: 0.
    pub seed: u64,
    /// Lowest register index handed out. Register 0 is reserved. Default: 1.
    pub first_register: u8,
    /// Highest register index handed out. Default: 27.
    pub last_register: u8,
    /// Rejection-sampling draws allowed per requested unique value.
    /// Default: 1024.
    pub attempts_per_value: u32,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            first_register: 1,
            last_register: MAX_REGISTER,
            attempts_per_value: 1024,
        }
    }
}

impl GenConfig {
    /// Default configuration with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Number of distinct register indices in `first_register..=last_register`.
    pub fn register_pool_size(&self) -> u64 {
        if self.first_register > self.last_register {
            0
        } else {
            u64::from(self.last_register - self.first_register) + 1
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first_register == 0 {
            return Err(ConfigError::ReservedRegister);
        }
        if self.last_register > MAX_REGISTER {
            return Err(ConfigError::RegisterOutOfRange {
                last: self.last_register,
            });
        }
        if self.first_register > self.last_register {
            return Err(ConfigError::EmptyRegisterRange {
                first: self.first_register,
                last: self.last_register,
            });
        }
        if self.attempts_per_value == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}

/// Errors detected by [`GenConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `first_register` is 0, which is reserved.
    ReservedRegister,
    /// `last_register` is above [`MAX_REGISTER`].
    RegisterOutOfRange {
        /// Configured highest index.
        last: u8,
    },
    /// `first_register > last_register`.
    EmptyRegisterRange {
        /// Configured lowest index.
        first: u8,
        /// Configured highest index.
        last: u8,
    },
    /// `attempts_per_value` is 0, so no draw could ever succeed.
    ZeroAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedRegister => write!(f, "register 0 is reserved and cannot be allocated"),
            Self::RegisterOutOfRange { last } => {
                write!(f, "last_register {last} exceeds highest register {MAX_REGISTER}")
            }
            Self::EmptyRegisterRange { first, last } => {
                write!(f, "empty register range {first}..={last}")
            }
            Self::ZeroAttempts => write!(f, "attempts_per_value must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
