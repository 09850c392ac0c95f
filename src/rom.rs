use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Input, RomError};
use crate::layout::{RomLayout, PACK_ALIGN};

/// A finished ROM image.
///
/// The buffer is allocated zeroed at its full size, so padding never has to be
/// written. Payloads and the trailer are copied in at fixed offsets and the
/// length never changes afterwards.
pub struct RomImage {
    data: Vec<u8>,
}

impl RomImage {
    fn blank(layout: &RomLayout) -> Self {
        let mut data = vec![0; layout.size];
        data[layout.trailer_offset()..].copy_from_slice(layout.trailer);
        Self { data }
    }

    /// One payload spanning the whole area in front of the trailer.
    pub fn single(layout: &RomLayout, payload: &[u8]) -> Result<Self, RomError> {
        check_fits(Input::Rom, payload, layout.capacity())?;

        let mut rom = Self::blank(layout);
        rom.place(0, payload);
        Ok(rom)
    }

    /// Two payloads, one per half of the ROM. The trailer comes out of the
    /// second half, so the second payload gets that much less room.
    pub fn dual(layout: &RomLayout, kernel: &[u8], kernel_tests: &[u8]) -> Result<Self, RomError> {
        let half = layout.half();
        check_fits(Input::Kernel, kernel, half)?;
        check_fits(Input::KernelTests, kernel_tests, layout.trailer_offset() - half)?;

        let mut rom = Self::blank(layout);
        rom.place(0, kernel);
        rom.place(half, kernel_tests);
        Ok(rom)
    }

    /// Any number of payloads back to back, each starting on a
    /// [`PACK_ALIGN`] boundary.
    pub fn packed<P: AsRef<Path>>(layout: &RomLayout, files: &[(P, Vec<u8>)]) -> Result<Self, RomError> {
        if files.is_empty() {
            return Err(RomError::NoInputs);
        }

        let capacity = layout.capacity();
        let mut offsets = Vec::with_capacity(files.len());
        let mut offset = 0;
        for (index, (path, payload)) in files.iter().enumerate() {
            let end = align_up(offset + payload.len(), PACK_ALIGN);
            if end > capacity {
                return Err(RomError::InputTooLarge {
                    input: Input::Packed {
                        index,
                        path: path.as_ref().to_path_buf(),
                    },
                    len: payload.len(),
                    budget: capacity.saturating_sub(offset),
                });
            }
            offsets.push(offset);
            offset = end;
        }

        let mut rom = Self::blank(layout);
        for (&at, (_, payload)) in offsets.iter().zip(files) {
            rom.place(at, payload);
        }
        Ok(rom)
    }

    fn place(&mut self, offset: usize, payload: &[u8]) {
        debug!("placing {} bytes at {:#07x}", payload.len(), offset);
        self.data[offset..offset + payload.len()].copy_from_slice(payload);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Writes the whole image in one go, replacing whatever is at `path`.
    pub fn write_to(&self, path: &Path) -> Result<(), RomError> {
        fs::write(path, &self.data).map_err(|e| RomError::io(path, e))
    }
}

fn check_fits(input: Input, payload: &[u8], budget: usize) -> Result<(), RomError> {
    if payload.len() > budget {
        return Err(RomError::InputTooLarge {
            input,
            len: payload.len(),
            budget,
        });
    }
    Ok(())
}

fn align_up(value: usize, align: usize) -> usize {
    value.div_ceil(align) * align
}
