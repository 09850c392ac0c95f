use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use crate::error::RomError;
use crate::layout::RomLayout;
use crate::rom::RomImage;

/// Pads one or two binaries into a 256 KiB ROM image ending in the 68k IRQ
/// auto-vector table.
///
///   finalizerom <in_rom> <out_rom>
///   finalizerom <in_payload1> <in_payload2> <out_rom>
///   finalizerom --pack <in>... <out_rom>
#[derive(Parser, Debug)]
#[command(name = "finalizerom", version, verbatim_doc_comment)]
pub struct Args {
    /// Append every input back to back on 4-byte boundaries instead of
    /// using fixed slots
    #[arg(long)]
    pub pack: bool,

    /// Input files followed by the output ROM path
    #[arg(value_name = "FILE", num_args = 2.., required = true)]
    pub files: Vec<PathBuf>,
}

/// How the inputs are laid out in the image.
#[derive(Debug, Eq, PartialEq)]
pub enum Mode<'a> {
    Single(&'a Path),
    Dual(&'a Path, &'a Path),
    Packed(&'a [PathBuf]),
}

impl Args {
    /// Splits the positional paths into the layout mode and the output path.
    pub fn mode(&self) -> Result<(Mode<'_>, &Path), String> {
        let (output, inputs) = self
            .files
            .split_last()
            .ok_or_else(|| "missing output ROM path".to_string())?;

        let mode = match (self.pack, inputs) {
            (_, []) => return Err("missing input file".to_string()),
            (true, inputs) => Mode::Packed(inputs),
            (false, [rom]) => Mode::Single(rom),
            (false, [kernel, kernel_tests]) => Mode::Dual(kernel, kernel_tests),
            (false, _) => {
                return Err("at most two input files without --pack".to_string());
            }
        };
        Ok((mode, output))
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>, RomError> {
    let data = fs::read(path).map_err(|e| RomError::io(path, e))?;
    info!("read {} ({} bytes)", path.display(), data.len());
    Ok(data)
}

/// Reads every input, assembles the image and writes it out. Nothing is
/// written unless every input fits.
pub fn finalize(mode: Mode<'_>, output: &Path) -> Result<(), RomError> {
    let layout = RomLayout::DEFAULT;

    let rom = match mode {
        Mode::Single(rom) => RomImage::single(&layout, &read_input(rom)?)?,
        Mode::Dual(kernel, kernel_tests) => {
            let kernel = read_input(kernel)?;
            let kernel_tests = read_input(kernel_tests)?;
            RomImage::dual(&layout, &kernel, &kernel_tests)?
        }
        Mode::Packed(paths) => {
            let files = paths
                .iter()
                .map(|path| read_input(path).map(|data| (path, data)))
                .collect::<Result<Vec<_>, _>>()?;
            RomImage::packed(&layout, &files)?
        }
    };

    rom.write_to(output)?;
    info!("wrote {} ({} bytes)", output.display(), rom.len());
    Ok(())
}
