mod word_diff;

// Exported objects
pub use crate::word_diff::error::{Side, WordDiffError};
pub use crate::word_diff::result::Result;
pub use crate::word_diff::word_diff_hunk::WordDiffHunk;
pub use crate::word_diff::{open, write_diff, WordDiff, BLOCK_SIZE};

extern crate log;
