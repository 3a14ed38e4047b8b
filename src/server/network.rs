use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

/// Upper bound on one framed message. Requests and replies are small JSON
/// objects, so anything past this is a corrupt or hostile length prefix.
pub const MAX_MESSAGE_SIZE: u32 = 64 * 1024;

/// Sends one length-prefixed message (u32 little-endian size, then the UTF-8
/// payload).
pub fn send_message<W: Write>(stream: &mut W, message: &str) -> io::Result<()> {
    let message_bytes = message.as_bytes();
    let size = message_bytes.len() as u32;
    stream.write_u32::<LittleEndian>(size)?;
    stream.write_all(message_bytes)?;
    Ok(())
}

/// Receives one length-prefixed message. The size prefix is validated before
/// anything is allocated.
pub fn receive_message<R: Read>(stream: &mut R) -> io::Result<String> {
    let size = stream.read_u32::<LittleEndian>()?;
    if size > MAX_MESSAGE_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("message of {} bytes exceeds the frame limit", size),
        ));
    }
    let mut buffer = vec![0; size as usize];
    stream.read_exact(&mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("invalid utf-8: {}", e)))
}
