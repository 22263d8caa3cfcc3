use std::fmt;

type Offset = u64;
type Word = [u8; 4];

/// One differing word. Offsets are byte offsets into each input; values are
/// assembled little-endian.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WordDiffHunk {
    offset_a: Offset,
    offset_b: Offset,
    word_a: Word,
    word_b: Word,
    width: usize,
}

impl WordDiffHunk {
    pub fn new(offset_a: Offset, word_a: Word, offset_b: Offset, word_b: Word) -> Self {
        Self {
            offset_a,
            offset_b,
            word_a,
            word_b,
            width: word_a.len(),
        }
    }

    pub fn offset_a(&self) -> Offset {
        self.offset_a
    }

    pub fn offset_b(&self) -> Offset {
        self.offset_b
    }

    pub fn word_a(&self) -> &Word {
        &self.word_a
    }

    pub fn word_b(&self) -> &Word {
        &self.word_b
    }

    pub fn value_a(&self) -> u32 {
        u32::from_le_bytes(self.word_a)
    }

    pub fn value_b(&self) -> u32 {
        u32::from_le_bytes(self.word_b)
    }

    /// Block width in bytes.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of 32-bit words covered by this hunk.
    pub fn word_count(&self) -> usize {
        self.width / 4
    }
}

impl fmt::Display for WordDiffHunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "@@ u8,u32 -0x{:x},{} +0x{:x},{} @@",
            self.offset_a,
            self.word_count(),
            self.offset_b,
            self.word_count()
        )?;
        writeln!(f, "- 0x{:x} # {}", self.value_a(), self.value_a())?;
        write!(f, "+ 0x{:x} # {}", self.value_b(), self.value_b())
    }
}
