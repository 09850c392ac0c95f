use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Identifies which payload slot an input was headed for.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Input {
    /// The only input in single mode.
    Rom,
    /// First half in dual mode.
    Kernel,
    /// Second half in dual mode.
    KernelTests,
    /// Position of a file in packed mode.
    Packed { index: usize, path: PathBuf },
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Rom => write!(f, "rom file"),
            Input::Kernel => write!(f, "kernel bin file"),
            Input::KernelTests => write!(f, "kernel tests bin file"),
            Input::Packed { index, path } => write!(f, "file #{} '{}'", index + 1, path.display()),
        }
    }
}

/// Errors that abort assembling a ROM image.
#[derive(Error, Debug)]
pub enum RomError {
    #[error("{} ({len} bytes, {budget} available)", too_large_phrase(.input))]
    InputTooLarge {
        input: Input,
        len: usize,
        budget: usize,
    },

    #[error("no input files given")]
    NoInputs,

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RomError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RomError::Io {
            path: path.into(),
            source,
        }
    }
}

fn too_large_phrase(input: &Input) -> String {
    match input {
        Input::Rom => format!("{input} too large"),
        Input::Packed { .. } => format!("ROM too big: {input} does not fit"),
        Input::Kernel | Input::KernelTests => format!("{input} is too big"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn too_large(input: Input) -> String {
        RomError::InputTooLarge {
            input,
            len: 10,
            budget: 8,
        }
        .to_string()
    }

    #[test]
    fn messages_name_the_input() {
        assert!(too_large(Input::Rom).starts_with("rom file too large"));
        assert!(too_large(Input::Kernel).starts_with("kernel bin file is too big"));
        assert!(too_large(Input::KernelTests).starts_with("kernel tests bin file is too big"));
        assert_eq!(
            too_large(Input::Packed { index: 1, path: "b.bin".into() }),
            "ROM too big: file #2 'b.bin' does not fit (10 bytes, 8 available)"
        );
    }

    #[test]
    fn io_error_carries_path() {
        let err = RomError::io("missing.bin", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.to_string().starts_with("I/O error on 'missing.bin'"));
    }
}
