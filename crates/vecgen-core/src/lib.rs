//! Core types for the vecgen test-input generator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: lane constants,
//! the [`Vector`] value type, [`LaneMask`], [`RegisterName`], error
//! types, and [`GenConfig`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod lane;
pub mod register;

pub use config::{ConfigError, GenConfig, MAX_REGISTER};
pub use error::{AllocError, MemoryError};
pub use lane::{vector_xor, LaneMask, Vector, LANES, LANE_BYTES};
pub use register::RegisterName;
