//! Seeded random allocators for directed test inputs.
//!
//! Every allocator takes an explicit `&mut R: Rng` handle; there is no
//! process-wide RNG. Use [`Generator`] for a seeded `ChaCha8Rng` bundled
//! with a [`GenConfig`](vecgen_core::GenConfig), or call the free
//! functions with any RNG of your own.
//!
//! - [`allocate_unique_registers`]: distinct register names
//! - [`allocate_unique_scalar_values`]: distinct non-zero `u32` values
//! - [`allocate_random_vector_value`]: one 16-lane vector
//! - [`shuffle_indices`]: a random permutation of the lane indices

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod generator;
pub mod unique;

pub use generator::Generator;
pub use unique::{
    allocate_random_vector_value, allocate_unique_registers, allocate_unique_scalar_values,
    shuffle_indices,
};
