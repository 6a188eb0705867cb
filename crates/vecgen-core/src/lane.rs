//! Vector lanes, lane masks, and the masked lane merge.
//!
//! A vector register holds [`LANES`] 32-bit lanes. Masked operations
//! select lanes with a 16-bit [`LaneMask`] read most-significant-bit
//! first: lane 0 is controlled by bit 15, lane 15 by bit 0.

use std::fmt;

/// Number of lanes in a vector value.
pub const LANES: usize = 16;

/// Width in bytes of a single lane in memory.
pub const LANE_BYTES: usize = 4;

/// A full vector register value, one `u32` per lane.
pub type Vector = [u32; LANES];

/// Top bit of the 16-bit mask; the bit tested for the current lane.
const LANE_SELECT: u32 = 0x8000;

/// A 16-bit lane-enable mask, consumed MSB-first.
///
/// Lane `i` is active when `(mask << i) & 0x8000` is non-zero, which is
/// bit `15 - i` of the raw mask. Generated test vectors depend on this
/// exact ordering, so it must not be replaced by `(mask >> i) & 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaneMask(pub u16);

impl LaneMask {
    /// Every lane active.
    pub const ALL: Self = Self(0xFFFF);

    /// No lane active.
    pub const NONE: Self = Self(0x0000);

    /// Resolve an optional mask, treating `None` as [`LaneMask::ALL`].
    pub fn or_all(mask: Option<Self>) -> Self {
        mask.unwrap_or(Self::ALL)
    }

    /// Returns `true` if `lane` is enabled by this mask.
    ///
    /// Lanes at index [`LANES`] or beyond are never active.
    pub fn is_active(self, lane: usize) -> bool {
        lane < LANES && (u32::from(self.0) << lane) & LANE_SELECT != 0
    }

    /// Iterate the active lane indices in ascending order.
    pub fn active_lanes(self) -> impl Iterator<Item = usize> {
        (0..LANES).filter(move |&lane| self.is_active(lane))
    }

    /// Number of active lanes.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl Default for LaneMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<u16> for LaneMask {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

impl fmt::Display for LaneMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// Merge `valuea ^ valueb` into `original` under `mask`.
///
/// Active lanes take the xor of the two operands; inactive lanes keep
/// their value from `original`. This is the expected result of a
/// masked vector xor instruction.
pub fn vector_xor(original: &Vector, valuea: &Vector, valueb: &Vector, mask: LaneMask) -> Vector {
    let mut result = *original;
    for (lane, out) in result.iter_mut().enumerate() {
        if mask.is_active(lane) {
            *out = valuea[lane] ^ valueb[lane];
        }
    }
    result
}
