//! Reader for `.resources` containers
//!
//! A container is a sequence of named resources. The reader parses the
//! headers and the name index up front, then decodes values lazily as the
//! entries are iterated. Iteration consumes the reader, so a container can be
//! walked only once per open.

use crate::bitmap;
use crate::error::ContainerError;
use image::DynamicImage;
use std::fs;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

// Container format constants
pub const MAGIC_NUMBER: u32 = 0xBEEF_CACE;
const ALIGNMENT: u64 = 8;
const USER_TYPE_START: i32 = 0x40;
const NULL_TYPE_INDEX: i32 = -1;
const EXTENSIONS_READER: &str = "System.Resources.Extensions.DeserializingResourceReader";
const BITMAP_TYPE: &str = "System.Drawing.Bitmap";

type Result<T> = std::result::Result<T, ContainerError>;

/// Built-in value type codes (resource set version 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeCode {
    Null,
    String,
    Boolean,
    Char,
    Byte,
    SByte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Single,
    Double,
    Decimal,
    DateTime,
    TimeSpan,
    ByteArray,
    Stream,
}

impl TypeCode {
    fn from_code(code: i32) -> Option<Self> {
        let tc = match code {
            0x00 => TypeCode::Null,
            0x01 => TypeCode::String,
            0x02 => TypeCode::Boolean,
            0x03 => TypeCode::Char,
            0x04 => TypeCode::Byte,
            0x05 => TypeCode::SByte,
            0x06 => TypeCode::Int16,
            0x07 => TypeCode::UInt16,
            0x08 => TypeCode::Int32,
            0x09 => TypeCode::UInt32,
            0x0A => TypeCode::Int64,
            0x0B => TypeCode::UInt64,
            0x0C => TypeCode::Single,
            0x0D => TypeCode::Double,
            0x0E => TypeCode::Decimal,
            0x0F => TypeCode::DateTime,
            0x10 => TypeCode::TimeSpan,
            0x20 => TypeCode::ByteArray,
            0x21 => TypeCode::Stream,
            _ => return None,
        };
        Some(tc)
    }

    /// Version 1 containers name their value types instead of using codes
    fn from_type_name(type_name: &str) -> Option<Self> {
        let tc = match qualified_name(type_name) {
            "System.String" => TypeCode::String,
            "System.Boolean" => TypeCode::Boolean,
            "System.Char" => TypeCode::Char,
            "System.Byte" => TypeCode::Byte,
            "System.SByte" => TypeCode::SByte,
            "System.Int16" => TypeCode::Int16,
            "System.UInt16" => TypeCode::UInt16,
            "System.Int32" => TypeCode::Int32,
            "System.UInt32" => TypeCode::UInt32,
            "System.Int64" => TypeCode::Int64,
            "System.UInt64" => TypeCode::UInt64,
            "System.Single" => TypeCode::Single,
            "System.Double" => TypeCode::Double,
            "System.Decimal" => TypeCode::Decimal,
            "System.DateTime" => TypeCode::DateTime,
            "System.TimeSpan" => TypeCode::TimeSpan,
            _ => return None,
        };
        Some(tc)
    }
}

/// How a user-type payload was serialized by the extensions writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializationFormat {
    BinaryFormatter,
    TypeConverterString,
    TypeConverterByteArray,
    ActivatorStream,
}

impl SerializationFormat {
    fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(SerializationFormat::BinaryFormatter),
            2 => Some(SerializationFormat::TypeConverterString),
            3 => Some(SerializationFormat::TypeConverterByteArray),
            4 => Some(SerializationFormat::ActivatorStream),
            _ => None,
        }
    }
}

/// A scalar value stored inline in the container
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Boolean(bool),
    /// A single UTF-16 code unit
    Char(u16),
    Byte(u8),
    SByte(i8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Single(f32),
    Double(f64),
    /// Raw 128-bit decimal representation
    Decimal([u8; 16]),
    /// Binary-encoded date (ticks plus kind bits)
    DateTime(i64),
    /// Duration in 100ns ticks
    TimeSpan(i64),
}

impl Primitive {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Primitive::Boolean(_) => "Boolean",
            Primitive::Char(_) => "Char",
            Primitive::Byte(_) => "Byte",
            Primitive::SByte(_) => "SByte",
            Primitive::Int16(_) => "Int16",
            Primitive::UInt16(_) => "UInt16",
            Primitive::Int32(_) => "Int32",
            Primitive::UInt32(_) => "UInt32",
            Primitive::Int64(_) => "Int64",
            Primitive::UInt64(_) => "UInt64",
            Primitive::Single(_) => "Single",
            Primitive::Double(_) => "Double",
            Primitive::Decimal(_) => "Decimal",
            Primitive::DateTime(_) => "DateTime",
            Primitive::TimeSpan(_) => "TimeSpan",
        }
    }
}

/// The decoded value of a resource
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceValue {
    Null,
    Text(String),
    Bytes(Vec<u8>),
    Image(DynamicImage),
    Primitive(Primitive),
    Stream(Vec<u8>),
    /// A user type that is kept in serialized form
    Serialized { type_name: String, data: Vec<u8> },
}

impl ResourceValue {
    /// Short runtime type name of the value, `null` when absent
    pub fn kind_name(&self) -> &str {
        match self {
            ResourceValue::Null => "null",
            ResourceValue::Text(_) => "String",
            ResourceValue::Bytes(_) => "Byte[]",
            ResourceValue::Image(_) => "Bitmap",
            ResourceValue::Primitive(p) => p.kind_name(),
            ResourceValue::Stream(_) => "UnmanagedMemoryStream",
            ResourceValue::Serialized { type_name, .. } => short_type_name(type_name),
        }
    }
}

/// One named resource
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceEntry {
    pub key: String,
    pub value: ResourceValue,
}

impl ResourceEntry {
    pub fn new(key: impl Into<String>, value: ResourceValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Parsed container headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Reader type named by the manager header (header version 1 only)
    pub reader_type: Option<String>,
    /// Resource set type named by the manager header (header version 1 only)
    pub set_type: Option<String>,
    /// Resource set format version (1 or 2)
    pub version: i32,
    /// Type table used by user-type values
    pub type_names: Vec<String>,
}

impl ContainerHeader {
    /// Whether user-type payloads carry a serialization format prefix
    pub fn uses_extensions_reader(&self) -> bool {
        self.reader_type
            .as_deref()
            .is_some_and(|name| qualified_name(name) == EXTENSIONS_READER)
    }
}

/// Name index slot: key plus the absolute byte range of its value
#[derive(Debug, Clone)]
struct Slot {
    key: String,
    start: u64,
    end: u64,
}

/// Little-endian reader with bounds checks against the stream length
#[derive(Debug)]
struct BinaryStream<R> {
    inner: R,
    len: u64,
}

impl<R: Read + Seek> BinaryStream<R> {
    fn new(mut inner: R) -> Result<Self> {
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(0))?;
        Ok(Self { inner, len })
    }

    fn position(&mut self) -> Result<u64> {
        Ok(self.inner.stream_position()?)
    }

    fn remaining(&mut self) -> Result<u64> {
        Ok(self.len.saturating_sub(self.position()?))
    }

    fn seek_to(&mut self, pos: u64) -> Result<()> {
        if pos > self.len {
            return Err(ContainerError::Malformed(format!(
                "offset {} is past the end of the file ({} bytes)",
                pos, self.len
            )));
        }
        self.inner.seek(SeekFrom::Start(pos))?;
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.inner.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    /// Read a non-negative `i32`, naming `what` in the error
    fn read_count(&mut self, what: &str) -> Result<u64> {
        let value = self.read_i32()?;
        u64::try_from(value)
            .map_err(|_| ContainerError::Malformed(format!("negative {}: {}", what, value)))
    }

    /// Read a 7-bit encoded integer (low groups first, high bit continues)
    fn read_7bit_int(&mut self) -> Result<i32> {
        let mut result: u32 = 0;
        let mut shift = 0;
        loop {
            let byte = self.read_u8()?;
            result |= u32::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                return Ok(result as i32);
            }
            shift += 7;
            if shift >= 35 {
                return Err(ContainerError::Malformed("bad 7-bit encoded integer".into()));
            }
        }
    }

    fn read_7bit_len(&mut self) -> Result<u64> {
        let value = self.read_7bit_int()?;
        u64::try_from(value)
            .map_err(|_| ContainerError::Malformed(format!("negative length: {}", value)))
    }

    fn read_bytes(&mut self, len: u64) -> Result<Vec<u8>> {
        if len > self.remaining()? {
            return Err(ContainerError::Malformed(format!(
                "{} byte value runs past the end of the file",
                len
            )));
        }
        let mut buf = vec![0u8; len as usize];
        self.inner.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn skip(&mut self, len: u64) -> Result<()> {
        let target = self.position()? + len;
        self.seek_to(target)
    }

    /// Length-prefixed UTF-8 string
    fn read_string(&mut self) -> Result<String> {
        let len = self.read_7bit_len()?;
        let bytes = self.read_bytes(len)?;
        String::from_utf8(bytes)
            .map_err(|_| ContainerError::Malformed("string is not valid UTF-8".into()))
    }

    /// Length-prefixed UTF-16LE string, as used by the name section
    fn read_utf16_string(&mut self) -> Result<String> {
        let offset = self.position()?;
        let len = self.read_7bit_len()?;
        let bytes = self.read_bytes(len)?;
        if bytes.len() % 2 != 0 {
            return Err(ContainerError::InvalidName(offset));
        }
        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16(&units).map_err(|_| ContainerError::InvalidName(offset))
    }
}

/// Reads entries from a `.resources` container
#[derive(Debug)]
pub struct ResourceReader<R> {
    stream: BinaryStream<R>,
    header: ContainerHeader,
    index: Vec<Slot>,
}

impl ResourceReader<BufReader<fs::File>> {
    /// Open a container file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = fs::File::open(path.as_ref())?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> ResourceReader<R> {
    /// Parse the headers and the name index of a container
    pub fn new(inner: R) -> Result<Self> {
        let mut stream = BinaryStream::new(inner)?;
        let (header, count) = Self::read_header(&mut stream)?;
        let index = Self::read_index(&mut stream, count)?;

        log::debug!(
            "Container version {} with {} resources and {} types (reader: {})",
            header.version,
            index.len(),
            header.type_names.len(),
            header.reader_type.as_deref().unwrap_or("unspecified")
        );

        Ok(Self { stream, header, index })
    }

    pub fn header(&self) -> &ContainerHeader {
        &self.header
    }

    /// Number of resources in the container
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Resource names in iteration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.index.iter().map(|slot| slot.key.as_str())
    }

    fn read_header(stream: &mut BinaryStream<R>) -> Result<(ContainerHeader, u64)> {
        let magic = stream.read_u32()?;
        if magic != MAGIC_NUMBER {
            return Err(ContainerError::BadMagic(magic));
        }

        let header_version = stream.read_i32()?;
        let header_len = stream.read_count("header length")?;
        let header_end = stream.position()? + header_len;

        let (reader_type, set_type) = if header_version == 1 {
            (Some(stream.read_string()?), Some(stream.read_string()?))
        } else {
            (None, None)
        };
        stream.seek_to(header_end)?;

        let version = stream.read_i32()?;
        if !(1..=2).contains(&version) {
            return Err(ContainerError::UnsupportedVersion(version));
        }

        let count = stream.read_count("resource count")?;
        let type_count = stream.read_count("type count")?;
        if type_count > stream.remaining()? {
            return Err(ContainerError::Malformed(format!(
                "type count {} exceeds file size",
                type_count
            )));
        }
        let type_names = (0..type_count)
            .map(|_| stream.read_string())
            .collect::<Result<Vec<_>>>()?;

        let misalignment = stream.position()? % ALIGNMENT;
        if misalignment != 0 {
            stream.skip(ALIGNMENT - misalignment)?;
        }

        let header = ContainerHeader {
            reader_type,
            set_type,
            version,
            type_names,
        };
        Ok((header, count))
    }

    fn read_index(stream: &mut BinaryStream<R>, count: u64) -> Result<Vec<Slot>> {
        // Hash table and position table, 4 bytes per entry each
        if count.saturating_mul(8) > stream.remaining()? {
            return Err(ContainerError::Malformed(format!(
                "resource count {} exceeds file size",
                count
            )));
        }
        stream.skip(count * 4)?;
        let name_positions = (0..count)
            .map(|_| stream.read_count("name position"))
            .collect::<Result<Vec<_>>>()?;

        let data_section = stream.read_count("data section offset")?;
        let name_section = stream.position()?;

        let mut index = Vec::with_capacity(name_positions.len());
        for name_pos in name_positions {
            stream.seek_to(name_section + name_pos)?;
            let key = stream.read_utf16_string()?;
            let start = data_section + stream.read_count("data position")?;
            if start > stream.len {
                return Err(ContainerError::Malformed(format!(
                    "data for '{}' is past the end of the file",
                    key
                )));
            }
            index.push(Slot { key, start, end: stream.len });
        }

        // A value runs until the next value starts
        let mut starts: Vec<u64> = index.iter().map(|slot| slot.start).collect();
        starts.sort_unstable();
        starts.dedup();
        for slot in &mut index {
            let next = starts.partition_point(|&s| s <= slot.start);
            if let Some(&end) = starts.get(next) {
                slot.end = end;
            }
        }

        Ok(index)
    }

    fn read_value(&mut self, key: &str, start: u64, end: u64) -> Result<ResourceValue> {
        self.stream.seek_to(start)?;

        if self.header.version == 1 {
            let type_index = self.stream.read_7bit_int()?;
            if type_index == NULL_TYPE_INDEX {
                return Ok(ResourceValue::Null);
            }
            let type_name = self.type_name(key, type_index)?;
            return match TypeCode::from_type_name(&type_name) {
                Some(tc) => self.read_builtin(tc),
                None => self.read_user_value(type_name, end),
            };
        }

        let code = self.stream.read_7bit_int()?;
        if code >= USER_TYPE_START {
            let type_name = self.type_name(key, code - USER_TYPE_START)?;
            return self.read_user_value(type_name, end);
        }
        let tc = TypeCode::from_code(code).ok_or_else(|| ContainerError::UnknownTypeCode {
            key: key.to_string(),
            code,
        })?;
        self.read_builtin(tc)
    }

    fn type_name(&self, key: &str, index: i32) -> Result<String> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.header.type_names.get(i))
            .cloned()
            .ok_or_else(|| ContainerError::UnknownTypeCode {
                key: key.to_string(),
                code: index,
            })
    }

    fn read_builtin(&mut self, tc: TypeCode) -> Result<ResourceValue> {
        let s = &mut self.stream;
        let primitive = match tc {
            TypeCode::Null => return Ok(ResourceValue::Null),
            TypeCode::String => return Ok(ResourceValue::Text(s.read_string()?)),
            TypeCode::ByteArray => {
                let len = s.read_count("byte array length")?;
                return Ok(ResourceValue::Bytes(s.read_bytes(len)?));
            }
            TypeCode::Stream => {
                let len = s.read_count("stream length")?;
                return Ok(ResourceValue::Stream(s.read_bytes(len)?));
            }
            TypeCode::Boolean => Primitive::Boolean(s.read_u8()? != 0),
            TypeCode::Char => Primitive::Char(u16::from_le_bytes(s.read_array()?)),
            TypeCode::Byte => Primitive::Byte(s.read_u8()?),
            TypeCode::SByte => Primitive::SByte(i8::from_le_bytes(s.read_array()?)),
            TypeCode::Int16 => Primitive::Int16(i16::from_le_bytes(s.read_array()?)),
            TypeCode::UInt16 => Primitive::UInt16(u16::from_le_bytes(s.read_array()?)),
            TypeCode::Int32 => Primitive::Int32(s.read_i32()?),
            TypeCode::UInt32 => Primitive::UInt32(s.read_u32()?),
            TypeCode::Int64 => Primitive::Int64(i64::from_le_bytes(s.read_array()?)),
            TypeCode::UInt64 => Primitive::UInt64(u64::from_le_bytes(s.read_array()?)),
            TypeCode::Single => Primitive::Single(f32::from_le_bytes(s.read_array()?)),
            TypeCode::Double => Primitive::Double(f64::from_le_bytes(s.read_array()?)),
            TypeCode::Decimal => Primitive::Decimal(s.read_array()?),
            TypeCode::DateTime => Primitive::DateTime(i64::from_le_bytes(s.read_array()?)),
            TypeCode::TimeSpan => Primitive::TimeSpan(i64::from_le_bytes(s.read_array()?)),
        };
        Ok(ResourceValue::Primitive(primitive))
    }

    fn read_user_value(&mut self, type_name: String, end: u64) -> Result<ResourceValue> {
        let (format, data) = if self.header.uses_extensions_reader() {
            let code = self.stream.read_7bit_int()?;
            let format = SerializationFormat::from_code(code).ok_or_else(|| {
                ContainerError::Malformed(format!("unknown serialization format {}", code))
            })?;
            let len = self.stream.read_7bit_len()?;
            (format, self.stream.read_bytes(len)?)
        } else {
            let len = end.saturating_sub(self.stream.position()?);
            (SerializationFormat::BinaryFormatter, self.stream.read_bytes(len)?)
        };

        if qualified_name(&type_name) == BITMAP_TYPE {
            match bitmap::decode(format, &data) {
                Some(image) => return Ok(ResourceValue::Image(image)),
                None => log::debug!(
                    "No decodable raster in {} payload ({} bytes)",
                    BITMAP_TYPE,
                    data.len()
                ),
            }
        }

        Ok(ResourceValue::Serialized { type_name, data })
    }
}

impl<R: Read + Seek> IntoIterator for ResourceReader<R> {
    type Item = Result<ResourceEntry>;
    type IntoIter = Entries<R>;

    fn into_iter(self) -> Entries<R> {
        Entries { reader: self, next: 0 }
    }
}

/// Single-pass iterator over the entries of a container
#[derive(Debug)]
pub struct Entries<R> {
    reader: ResourceReader<R>,
    next: usize,
}

impl<R: Read + Seek> Iterator for Entries<R> {
    type Item = Result<ResourceEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.reader.index.get_mut(self.next)?;
        self.next += 1;

        let key = std::mem::take(&mut slot.key);
        let (start, end) = (slot.start, slot.end);
        Some(
            self.reader
                .read_value(&key, start, end)
                .map(|value| ResourceEntry { key, value }),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.reader.index.len() - self.next;
        (left, Some(left))
    }
}

/// Type name without the assembly qualification
fn qualified_name(type_name: &str) -> &str {
    let mut depth = 0usize;
    for (i, c) in type_name.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return type_name[..i].trim(),
            _ => {}
        }
    }
    type_name.trim()
}

/// Simple type name: no namespace, no generic arguments
fn short_type_name(type_name: &str) -> &str {
    let name = qualified_name(type_name);
    let name = name.split('[').next().unwrap_or(name);
    name.rsplit('.').next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn stream(bytes: &[u8]) -> BinaryStream<Cursor<Vec<u8>>> {
        BinaryStream::new(Cursor::new(bytes.to_vec())).unwrap()
    }

    #[test]
    fn test_read_7bit_int() {
        assert_eq!(stream(&[0x00]).read_7bit_int().unwrap(), 0);
        assert_eq!(stream(&[0x7F]).read_7bit_int().unwrap(), 127);
        assert_eq!(stream(&[0x80, 0x01]).read_7bit_int().unwrap(), 128);
        assert_eq!(stream(&[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]).read_7bit_int().unwrap(), -1);
    }

    #[test]
    fn test_read_7bit_int_too_long() {
        let result = stream(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]).read_7bit_int();
        assert!(matches!(result, Err(ContainerError::Malformed(_))));
    }

    #[test]
    fn test_read_bytes_past_end() {
        let mut s = stream(&[1, 2, 3]);
        assert!(matches!(s.read_bytes(4), Err(ContainerError::Malformed(_))));
        assert_eq!(s.read_bytes(3).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_read_utf16_string() {
        let mut s = stream(&[0x04, b'h', 0x00, b'i', 0x00]);
        assert_eq!(s.read_utf16_string().unwrap(), "hi");

        let mut odd = stream(&[0x03, b'h', 0x00, b'i']);
        assert!(matches!(odd.read_utf16_string(), Err(ContainerError::InvalidName(0))));
    }

    #[test]
    fn test_bad_magic() {
        let result = ResourceReader::new(Cursor::new(b"PK\x03\x04 not a container".to_vec()));
        assert!(matches!(result, Err(ContainerError::BadMagic(0x0403_4B50))));
    }

    #[test]
    fn test_truncated_header() {
        let result = ResourceReader::new(Cursor::new(MAGIC_NUMBER.to_le_bytes().to_vec()));
        assert!(matches!(result, Err(ContainerError::Io(_))));
    }

    #[test]
    fn test_type_names() {
        let full = "System.Drawing.Bitmap, System.Drawing, Version=4.0.0.0, Culture=neutral";
        assert_eq!(qualified_name(full), "System.Drawing.Bitmap");
        assert_eq!(short_type_name(full), "Bitmap");

        let generic = "System.Collections.Generic.List`1[[System.String, mscorlib]], mscorlib";
        assert_eq!(
            qualified_name(generic),
            "System.Collections.Generic.List`1[[System.String, mscorlib]]"
        );
        assert_eq!(short_type_name(generic), "List`1");

        assert_eq!(short_type_name("Plain"), "Plain");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ResourceValue::Null.kind_name(), "null");
        assert_eq!(ResourceValue::Primitive(Primitive::Int32(42)).kind_name(), "Int32");
        assert_eq!(ResourceValue::Stream(vec![]).kind_name(), "UnmanagedMemoryStream");
        let icon = ResourceValue::Serialized {
            type_name: "System.Drawing.Icon, System.Drawing".into(),
            data: vec![],
        };
        assert_eq!(icon.kind_name(), "Icon");
    }

    #[test]
    fn test_v1_type_name_mapping() {
        assert_eq!(
            TypeCode::from_type_name("System.String, mscorlib, Version=4.0.0.0"),
            Some(TypeCode::String)
        );
        assert_eq!(TypeCode::from_type_name("System.Drawing.Bitmap, System.Drawing"), None);
    }
}
