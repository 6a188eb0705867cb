//! Register names handed out by the allocators.

use std::fmt;

/// A register operand name such as `s7` or `v12`.
///
/// `prefix` selects the register file and `index` the register within
/// it. Displayed as the prefix immediately followed by the decimal index.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegisterName {
    /// Register file prefix (e.g. `"s"` for scalar, `"v"` for vector).
    pub prefix: String,
    /// Register number within the file.
    pub index: u8,
}

impl RegisterName {
    /// Create a register name from a prefix and index.
    pub fn new(prefix: impl Into<String>, index: u8) -> Self {
        Self {
            prefix: prefix.into(),
            index,
        }
    }
}

impl fmt::Display for RegisterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.index)
    }
}
