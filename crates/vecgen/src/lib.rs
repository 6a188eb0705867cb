//! vecgen: directed verification test-input generation for 16-lane
//! vector processors.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all vecgen sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use vecgen::prelude::*;
//!
//! let mut generator = Generator::seeded(42);
//! let regs = generator.unique_registers("v", 3).unwrap();
//! let value = generator.random_vector();
//!
//! // Predict the memory a masked `store.v` leaves behind.
//! let mut data = vec![0u8; 64];
//! let mut mem = MemoryView::new(0x1000, &mut data);
//! mem.store_vector(0x1000, &value, 4, Some(LaneMask(0xff00))).unwrap();
//!
//! assert_eq!(regs.len(), 3);
//! assert_eq!(mem.read_u32(0x1000).unwrap(), value[0]);
//! assert_eq!(mem.read_u32(0x1020).unwrap(), 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `vecgen-core` | Lanes, masks, register names, errors, config |
//! | [`values`] | `vecgen-alloc` | Seeded unique-value allocators and shuffles |
//! | [`mem`] | `vecgen-mem` | Emulated stores, vector loads, `.byte` formatting |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, masks, errors and configuration (`vecgen-core`).
pub use vecgen_core as types;

/// Unique register, scalar and vector allocators (`vecgen-alloc`).
pub use vecgen_alloc as values;

/// Emulated memory stores and assembly formatting (`vecgen-mem`).
pub use vecgen_mem as mem;

/// Common imports for test generators.
///
/// ```rust
/// use vecgen::prelude::*;
/// ```
pub mod prelude {
    pub use vecgen_alloc::{
        allocate_random_vector_value, allocate_unique_registers, allocate_unique_scalar_values,
        shuffle_indices, Generator,
    };
    pub use vecgen_core::{
        vector_xor, AllocError, ConfigError, GenConfig, LaneMask, MemoryError, RegisterName,
        Vector, LANES,
    };
    pub use vecgen_mem::{make_assembly_array, make_vector_from_memory, MemoryView};
}
