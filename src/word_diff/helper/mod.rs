mod read_block;

pub(crate) use read_block::read_block;
