//! A mutable window onto a test program's data segment.
//!
//! [`MemoryView`] borrows the caller's byte buffer and maps absolute
//! addresses onto it by subtracting a base address. Stores mirror what
//! the simulated core would write, so the buffer can later be compared
//! against the simulator's final memory.
//!
//! All lane data is little-endian, [`LANE_BYTES`] bytes per lane.

use vecgen_core::{LaneMask, MemoryError, Vector, LANES, LANE_BYTES};

/// Decode the little-endian word at `index`, if it fits in `bytes`.
fn word_at(bytes: &[u8], index: usize) -> Option<u32> {
    let end = index.checked_add(LANE_BYTES)?;
    let word: [u8; LANE_BYTES] = bytes.get(index..end)?.try_into().ok()?;
    Some(u32::from_le_bytes(word))
}

/// Rebuild a vector from a raw buffer.
///
/// Lane `i` is the little-endian word at `start_offset + i * stride`.
/// Offsets are buffer indices, not addresses. A negative `stride` walks
/// down from `start_offset`, mirroring [`MemoryView::store_vector`].
///
/// # Errors
///
/// [`MemoryError::OutOfRange`] for the first lane that does not fit.
pub fn make_vector_from_memory(
    data: &[u8],
    start_offset: usize,
    stride: i32,
) -> Result<Vector, MemoryError> {
    let mut out = [0u32; LANES];
    for (lane, slot) in out.iter_mut().enumerate() {
        let index = start_offset as i64 + lane as i64 * i64::from(stride);
        *slot = usize::try_from(index)
            .ok()
            .and_then(|index| word_at(data, index))
            .ok_or(MemoryError::OutOfRange {
                address: index,
                len: LANE_BYTES,
                base: 0,
                size: data.len(),
            })?;
    }
    Ok(out)
}

/// Memory image of a test's data region starting at `base`.
#[derive(Debug)]
pub struct MemoryView<'a> {
    base: u32,
    bytes: &'a mut [u8],
}

impl<'a> MemoryView<'a> {
    /// Map `bytes` so that `bytes[0]` lives at absolute address `base`.
    pub fn new(base: u32, bytes: &'a mut [u8]) -> Self {
        Self { base, bytes }
    }

    /// Absolute address of the first byte.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Size of the image in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the image has no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &*self.bytes
    }

    fn out_of_range(&self, address: i64) -> MemoryError {
        MemoryError::OutOfRange {
            address,
            len: LANE_BYTES,
            base: self.base,
            size: self.bytes.len(),
        }
    }

    /// Buffer index of a word access at `address`, bounds checked.
    fn index_of(&self, address: i64) -> Result<usize, MemoryError> {
        usize::try_from(address - i64::from(self.base))
            .ok()
            .filter(|&index| {
                index
                    .checked_add(LANE_BYTES)
                    .is_some_and(|end| end <= self.bytes.len())
            })
            .ok_or_else(|| {
                let err = self.out_of_range(address);
                tracing::warn!(%err, "memory access outside image");
                err
            })
    }

    /// Store `value` at `address` as four little-endian bytes.
    ///
    /// # Errors
    ///
    /// [`MemoryError::OutOfRange`] if any of the four bytes falls outside
    /// the image; the buffer is left untouched.
    pub fn store_u32(&mut self, address: u32, value: u32) -> Result<(), MemoryError> {
        self.store_at(i64::from(address), value)
    }

    fn store_at(&mut self, address: i64, value: u32) -> Result<(), MemoryError> {
        let index = self.index_of(address)?;
        self.bytes[index..index + LANE_BYTES].copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Read the little-endian word at `address`.
    pub fn read_u32(&self, address: u32) -> Result<u32, MemoryError> {
        let address = i64::from(address);
        let index = self.index_of(address)?;
        word_at(&*self.bytes, index).ok_or_else(|| self.out_of_range(address))
    }

    /// Read a strided vector starting at absolute `address`.
    pub fn load_vector(&self, address: u32, stride: i32) -> Result<Vector, MemoryError> {
        let start = self.index_of(i64::from(address))?;
        make_vector_from_memory(&*self.bytes, start, stride).map_err(|err| match err {
            MemoryError::OutOfRange { address, .. } => {
                self.out_of_range(address.saturating_add(i64::from(self.base)))
            }
        })
    }

    /// Emulate a masked strided vector store.
    ///
    /// Each active lane `i` (see [`LaneMask::is_active`]) writes
    /// `value[i]` to `address + i * stride`. A `None` mask enables every
    /// lane.
    ///
    /// # Errors
    ///
    /// Stops at the first lane that falls outside the image. Lanes before
    /// it have already been written.
    pub fn store_vector(
        &mut self,
        address: u32,
        value: &Vector,
        stride: i32,
        mask: Option<LaneMask>,
    ) -> Result<(), MemoryError> {
        let mask = LaneMask::or_all(mask);
        for lane in mask.active_lanes() {
            let lane_address = i64::from(address) + lane as i64 * i64::from(stride);
            self.store_at(lane_address, value[lane])?;
        }
        Ok(())
    }

    /// Emulate a masked scatter store.
    ///
    /// Each active lane `i` writes `value[i]` to `addresses[i] + offset`.
    /// Lanes are written in ascending order, so when two lanes hit the
    /// same address the higher lane wins.
    ///
    /// # Errors
    ///
    /// Same as [`store_vector`](Self::store_vector).
    pub fn scatter_store(
        &mut self,
        addresses: &Vector,
        value: &Vector,
        offset: i32,
        mask: Option<LaneMask>,
    ) -> Result<(), MemoryError> {
        let mask = LaneMask::or_all(mask);
        for lane in mask.active_lanes() {
            let lane_address = i64::from(addresses[lane]) + i64::from(offset);
            self.store_at(lane_address, value[lane])?;
        }
        Ok(())
    }

    /// Format the whole image as a `.byte` directive.
    pub fn to_assembly_array(&self) -> String {
        crate::asm::make_assembly_array(&*self.bytes)
    }
}
