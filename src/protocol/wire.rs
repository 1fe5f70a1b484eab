//! Primitive readers and writers for the analyze wire format.
//!
//! The wire format is order-sensitive and length-prefixed. Strings are a
//! varint byte length followed by UTF-8 bytes; arrays are a varint element
//! count followed by the elements; optional values are a presence byte (0 or
//! 1) followed by the value when present; booleans are a single 0/1 byte.
//!
//! Anything malformed (truncation, an unexpected flag byte, invalid UTF-8)
//! is reported as a decode error, never a panic.

use std::io::{self, Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt};

use crate::error::{LanceaError, Result};
use crate::util::varint;

/// Write a length-prefixed UTF-8 string.
pub fn write_string<W: Write>(writer: &mut W, value: &str) -> Result<()> {
    varint::write_u32(writer, value.len() as u32)?;
    writer.write_all(value.as_bytes())?;
    Ok(())
}

/// Read a length-prefixed UTF-8 string.
pub fn read_string<R: Read>(reader: &mut R) -> Result<String> {
    let len = varint::read_u32(reader)? as usize;
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf).map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            LanceaError::decode("Incomplete string")
        } else {
            LanceaError::from(e)
        }
    })?;
    String::from_utf8(buf).map_err(|_| LanceaError::decode("Invalid UTF-8 in string"))
}

/// Write an optional string as a presence byte plus the value when present.
pub fn write_optional_string<W: Write>(writer: &mut W, value: Option<&str>) -> Result<()> {
    match value {
        Some(s) => {
            writer.write_u8(1)?;
            write_string(writer, s)
        }
        None => {
            writer.write_u8(0)?;
            Ok(())
        }
    }
}

/// Read an optional string written by [`write_optional_string`].
pub fn read_optional_string<R: Read>(reader: &mut R) -> Result<Option<String>> {
    match read_flag_byte(reader, "presence")? {
        0 => Ok(None),
        1 => Ok(Some(read_string(reader)?)),
        b => Err(LanceaError::decode(format!("Invalid presence byte: {b}"))),
    }
}

/// Write a count-prefixed string array.
pub fn write_string_array<W: Write>(writer: &mut W, values: &[String]) -> Result<()> {
    varint::write_u32(writer, values.len() as u32)?;
    for value in values {
        write_string(writer, value)?;
    }
    Ok(())
}

/// Read a count-prefixed string array. A zero count yields an empty `Vec`.
pub fn read_string_array<R: Read>(reader: &mut R) -> Result<Vec<String>> {
    let count = varint::read_u32(reader)? as usize;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(read_string(reader)?);
    }
    Ok(values)
}

/// Write a boolean as a single 0/1 byte.
pub fn write_bool<W: Write>(writer: &mut W, value: bool) -> Result<()> {
    writer.write_u8(u8::from(value))?;
    Ok(())
}

/// Read a boolean byte; anything other than 0 or 1 is a decode error.
pub fn read_bool<R: Read>(reader: &mut R) -> Result<bool> {
    match read_flag_byte(reader, "bool")? {
        0 => Ok(false),
        1 => Ok(true),
        b => Err(LanceaError::decode(format!("Invalid bool byte: {b}"))),
    }
}

fn read_flag_byte<R: Read>(reader: &mut R, what: &str) -> Result<u8> {
    reader.read_u8().map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            LanceaError::decode(format!("Incomplete {what} byte"))
        } else {
            LanceaError::from(e)
        }
    })
}
