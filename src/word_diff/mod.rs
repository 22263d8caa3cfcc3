use crate::word_diff::error::{Side, WordDiffError};
use crate::word_diff::word_diff_hunk::WordDiffHunk;
use helper::read_block;
use result::Result;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

pub mod error;
mod helper;
pub mod result;
pub mod word_diff_hunk;

/// Bytes compared per iteration.
pub const BLOCK_SIZE: usize = 4;

/// Opens `path` as a raw byte stream.
pub fn open<P: AsRef<Path>>(path: P) -> Result<BufReader<File>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| WordDiffError::OpenError {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("opened {}", path.display());
    Ok(BufReader::new(file))
}

/// Walks two streams in lockstep, one word at a time, yielding a hunk for
/// every word that differs.
///
/// The scan ends when both streams are exhausted on the same iteration. A
/// short block on either side is a [`WordDiffError::SizeMismatchError`]. The
/// first error is yielded once and the iterator is fused afterwards.
pub struct WordDiff<A: Read, B: Read> {
    a: A,
    b: B,
    offset_a: u64,
    offset_b: u64,
    words: u64,
    done: bool,
}

impl<A: Read, B: Read> WordDiff<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self {
            a,
            b,
            offset_a: 0,
            offset_b: 0,
            words: 0,
            done: false,
        }
    }

    pub fn offset_a(&self) -> u64 {
        self.offset_a
    }

    pub fn offset_b(&self) -> u64 {
        self.offset_b
    }

    fn next_hunk(&mut self) -> Result<Option<WordDiffHunk>> {
        loop {
            let mut buf_a = [0u8; BLOCK_SIZE];
            let mut buf_b = [0u8; BLOCK_SIZE];

            // Both sides are read before either result is inspected.
            let read_a = read_block(&mut self.a, &mut buf_a);
            let read_b = read_block(&mut self.b, &mut buf_b);
            let read_a = read_a.map_err(|e| WordDiffError::ReadError(Side::A, e))?;
            let read_b = read_b.map_err(|e| WordDiffError::ReadError(Side::B, e))?;

            if read_a == 0 && read_b == 0 {
                log::debug!("compared {} words", self.words);
                return Ok(None);
            }

            if read_a != BLOCK_SIZE || read_b != BLOCK_SIZE {
                return Err(WordDiffError::SizeMismatchError {
                    offset_a: self.offset_a,
                    read_a,
                    offset_b: self.offset_b,
                    read_b,
                });
            }

            log::trace!(
                "offset_a = {:#x}, offset_b = {:#x}, a = {:02x?}, b = {:02x?}",
                self.offset_a,
                self.offset_b,
                buf_a,
                buf_b
            );

            let hunk = if buf_a != buf_b {
                Some(WordDiffHunk::new(self.offset_a, buf_a, self.offset_b, buf_b))
            } else {
                None
            };

            self.offset_a += read_a as u64;
            self.offset_b += read_b as u64;
            self.words += 1;

            if let Some(hunk) = hunk {
                log::debug!("hunk at {:#x} / {:#x}", hunk.offset_a(), hunk.offset_b());
                return Ok(Some(hunk));
            }
        }
    }
}

impl<A: Read, B: Read> Iterator for WordDiff<A, B> {
    type Item = Result<WordDiffHunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_hunk() {
            Ok(Some(hunk)) => Some(Ok(hunk)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(why) => {
                self.done = true;
                Some(Err(why))
            }
        }
    }
}

/// Writes the `---`/`+++` header followed by every hunk found between `a`
/// and `b`. Hunks already written stay in `out` when the scan fails.
pub fn write_diff<W, A, B>(out: &mut W, label_a: &str, label_b: &str, a: A, b: B) -> Result<()>
where
    W: Write,
    A: Read,
    B: Read,
{
    writeln!(out, "--- {}", label_a).map_err(WordDiffError::WriteError)?;
    writeln!(out, "+++ {}", label_b).map_err(WordDiffError::WriteError)?;

    for hunk in WordDiff::new(a, b) {
        writeln!(out, "{}", hunk?).map_err(WordDiffError::WriteError)?;
    }
    Ok(())
}
