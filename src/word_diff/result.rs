use crate::word_diff::error::WordDiffError;

pub type Result<T> = std::result::Result<T, WordDiffError>;
