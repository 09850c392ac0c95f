//! Assembles fixed-size 256 KiB ROM images: payloads at fixed offsets, zero
//! padding, and the 68k IRQ auto-vector table in the last 16 bytes.

pub mod cli;
pub mod error;
pub mod layout;
pub mod rom;

pub use error::{Input, RomError};
pub use layout::{RomLayout, AUTOVEC, ROM_SIZE};
pub use rom::RomImage;
