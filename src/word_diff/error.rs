use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

type Offset = u64;

/// Which of the two compared streams an error belongs to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "a"),
            Self::B => write!(f, "b"),
        }
    }
}

#[derive(Debug, Error)]
pub enum WordDiffError {
    #[error("cannot open {}: {source}", .path.display())]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("read {0} failed: {1}")]
    ReadError(Side, std::io::Error),
    #[error("bad size read: a read {read_a} bytes at {offset_a:#x}, b read {read_b} bytes at {offset_b:#x}")]
    SizeMismatchError {
        offset_a: Offset,
        read_a: usize,
        offset_b: Offset,
        read_b: usize,
    },
    #[error("cannot write output: {0}")]
    WriteError(std::io::Error),
}
