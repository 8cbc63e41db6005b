//! Low-level class file header parsing.
//!
//! Every class file opens with a fixed 8-byte header:
//!
//! - 4-byte big-endian magic `0xCAFEBABE`
//! - 2-byte big-endian minor version
//! - 2-byte big-endian major version
//!
//! Only these 8 bytes are consulted; full structural validation of the
//! class file body is out of scope.

use std::io::Read;

/// Magic number opening every valid class file
pub const CLASS_MAGIC: u32 = 0xCAFE_BABE;

/// Version fields extracted from a class file header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassHeader {
    /// Minor version (second header field)
    pub minor: u16,
    /// Major version (third header field); maps to a Java release
    pub major: u16,
}

/// Outcome of parsing one candidate header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderOutcome {
    /// The magic matched and both version fields were read
    Valid(ClassHeader),
    /// The first four bytes were not the class file magic
    BadMagic,
}

/// Parse the 8-byte class file header from the start of `reader`.
///
/// A wrong magic number is not an error: the stream is simply not a class
/// file and [`HeaderOutcome::BadMagic`] is returned. Short reads and other
/// I/O failures surface as `Err` so the caller can report them per item
/// without aborting the run.
pub fn parse_header<R: Read>(mut reader: R) -> std::io::Result<HeaderOutcome> {
    let mut word = [0u8; 4];
    reader.read_exact(&mut word)?;
    if u32::from_be_bytes(word) != CLASS_MAGIC {
        return Ok(HeaderOutcome::BadMagic);
    }

    // Minor precedes major in the file
    let mut half = [0u8; 2];
    reader.read_exact(&mut half)?;
    let minor = u16::from_be_bytes(half);
    reader.read_exact(&mut half)?;
    let major = u16::from_be_bytes(half);

    Ok(HeaderOutcome::Valid(ClassHeader { minor, major }))
}
