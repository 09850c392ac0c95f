
/// Total size of the finished ROM image (256 KiB).
pub const ROM_SIZE: usize = 256 * 1024;

/// 68k IRQ auto-vector generation data. Sits in the last 16 bytes of the ROM.
pub const AUTOVEC: [u8; 16] = [
    0x00, 0x18, 0x00, 0x19, 0x00, 0x1a, 0x00, 0x1b,
    0x00, 0x1c, 0x00, 0x1d, 0x00, 0x1e, 0x00, 0x1f,
];

/// Alignment applied after each file in packed mode.
pub const PACK_ALIGN: usize = 4;

/// Fixed geometry of a ROM image: its total size and the trailer that ends it.
///
/// Only [`RomLayout::DEFAULT`] is reachable from the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RomLayout {
    pub size: usize,
    pub trailer: &'static [u8],
}

impl RomLayout {
    pub const DEFAULT: RomLayout = RomLayout {
        size: ROM_SIZE,
        trailer: &AUTOVEC,
    };

    /// Bytes available for payload before the trailer.
    pub fn capacity(&self) -> usize {
        self.size - self.trailer.len()
    }

    /// Start of the second slot in dual mode.
    pub fn half(&self) -> usize {
        self.size / 2
    }

    pub fn trailer_offset(&self) -> usize {
        self.capacity()
    }
}

impl Default for RomLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}
