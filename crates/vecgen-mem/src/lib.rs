//! Emulated memory for directed vector tests.
//!
//! A test generator predicts the data segment a test program leaves
//! behind by replaying its stores against a [`MemoryView`]:
//!
//! - [`MemoryView::store_u32`]: single scalar store
//! - [`MemoryView::store_vector`]: masked strided vector store
//! - [`MemoryView::scatter_store`]: masked per-lane-address store
//! - [`make_vector_from_memory`]: strided vector load from raw bytes
//!
//! [`make_assembly_array`] renders initial memory contents as a `.byte`
//! directive for the test's data section.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod asm;
pub mod view;

pub use asm::make_assembly_array;
pub use view::{make_vector_from_memory, MemoryView};
