use std::io::{ErrorKind, Read};

// Fills `buf` unless end-of-stream comes first. A short count means the
// stream ended inside this block.
pub fn read_block<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0usize;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    log::trace!("read_block(len={}) = {}", buf.len(), filled);
    Ok(filled)
}
