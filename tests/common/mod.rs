//! Builds `.resources` containers in memory for tests

#![allow(dead_code)]

use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

pub const READER_TYPE: &str =
    "System.Resources.ResourceReader, mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089";
pub const EXTENSIONS_READER_TYPE: &str =
    "System.Resources.Extensions.DeserializingResourceReader, System.Resources.Extensions, Version=4.0.0.0";
pub const SET_TYPE: &str = "System.Resources.RuntimeResourceSet";
pub const BITMAP_TYPE: &str =
    "System.Drawing.Bitmap, System.Drawing, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b03f5f7f11d50a3a";

/// A value to store in a fixture container
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    String(String),
    Boolean(bool),
    Int32(i32),
    Bytes(Vec<u8>),
    Stream(Vec<u8>),
    /// User type: name plus raw payload
    User(String, Vec<u8>),
}

impl Value {
    /// Type table name this value needs in the given container version
    fn type_name(&self, version: i32) -> Option<String> {
        let builtin = match self {
            Value::User(name, _) => return Some(name.clone()),
            _ if version == 2 => return None,
            Value::Null => return None,
            Value::String(_) => "System.String",
            Value::Boolean(_) => "System.Boolean",
            Value::Int32(_) => "System.Int32",
            Value::Bytes(_) | Value::Stream(_) => panic!("not representable in version 1"),
        };
        Some(format!("{}, mscorlib, Version=4.0.0.0", builtin))
    }
}

/// Writes a container in memory
#[derive(Debug, Clone)]
pub struct Fixture {
    version: i32,
    reader_type: String,
    entries: Vec<(String, Value)>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            version: 2,
            reader_type: READER_TYPE.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    pub fn with_reader_type(mut self, reader_type: &str) -> Self {
        self.reader_type = reader_type.to_string();
        self
    }

    pub fn entry(mut self, key: &str, value: Value) -> Self {
        self.entries.push((key.to_string(), value));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::new();

        // Manager header
        out.extend_from_slice(&0xBEEF_CACEu32.to_le_bytes());
        out.extend_from_slice(&1i32.to_le_bytes());
        let mut manager = Vec::new();
        write_string(&mut manager, &self.reader_type);
        write_string(&mut manager, SET_TYPE);
        out.extend_from_slice(&(manager.len() as i32).to_le_bytes());
        out.extend_from_slice(&manager);

        // Type table
        let mut types: Vec<String> = Vec::new();
        for (_, value) in &self.entries {
            if let Some(name) = value.type_name(self.version) {
                if !types.contains(&name) {
                    types.push(name);
                }
            }
        }

        out.extend_from_slice(&self.version.to_le_bytes());
        out.extend_from_slice(&(self.entries.len() as i32).to_le_bytes());
        out.extend_from_slice(&(types.len() as i32).to_le_bytes());
        for name in &types {
            write_string(&mut out, name);
        }
        let pad = b"PAD";
        let mut i = 0;
        while out.len() % 8 != 0 {
            out.push(pad[i % 3]);
            i += 1;
        }

        // Names and data
        let mut names = Vec::new();
        let mut data = Vec::new();
        let mut name_positions = Vec::new();
        for (key, value) in &self.entries {
            name_positions.push(names.len() as i32);
            let utf16: Vec<u8> = key.encode_utf16().flat_map(|u| u.to_le_bytes()).collect();
            write_7bit(&mut names, utf16.len() as u32);
            names.extend_from_slice(&utf16);
            names.extend_from_slice(&(data.len() as i32).to_le_bytes());
            self.write_value(&mut data, value, &types);
        }

        for i in 0..self.entries.len() {
            out.extend_from_slice(&(i as i32).to_le_bytes());
        }
        for pos in &name_positions {
            out.extend_from_slice(&pos.to_le_bytes());
        }
        let data_section = out.len() + 4 + names.len();
        out.extend_from_slice(&(data_section as i32).to_le_bytes());
        out.extend_from_slice(&names);
        out.extend_from_slice(&data);
        out
    }

    fn write_value(&self, out: &mut Vec<u8>, value: &Value, types: &[String]) {
        if self.version == 1 {
            return self.write_value_v1(out, value, types);
        }
        match value {
            Value::Null => out.push(0x00),
            Value::String(s) => {
                out.push(0x01);
                write_string(out, s);
            }
            Value::Boolean(b) => {
                out.push(0x02);
                out.push(u8::from(*b));
            }
            Value::Int32(n) => {
                out.push(0x08);
                out.extend_from_slice(&n.to_le_bytes());
            }
            Value::Bytes(bytes) => {
                out.push(0x20);
                out.extend_from_slice(&(bytes.len() as i32).to_le_bytes());
                out.extend_from_slice(bytes);
            }
            Value::Stream(bytes) => {
                out.push(0x21);
                out.extend_from_slice(&(bytes.len() as i32).to_le_bytes());
                out.extend_from_slice(bytes);
            }
            Value::User(name, payload) => {
                let index = types.iter().position(|t| t == name).unwrap();
                write_7bit(out, 0x40 + index as u32);
                if self.reader_type == EXTENSIONS_READER_TYPE {
                    // TypeConverterByteArray
                    write_7bit(out, 3);
                    write_7bit(out, payload.len() as u32);
                }
                out.extend_from_slice(payload);
            }
        }
    }

    fn write_value_v1(&self, out: &mut Vec<u8>, value: &Value, types: &[String]) {
        let Some(name) = value.type_name(1) else {
            write_7bit(out, u32::MAX);
            return;
        };
        let index = types.iter().position(|t| *t == name).unwrap();
        write_7bit(out, index as u32);
        match value {
            Value::String(s) => write_string(out, s),
            Value::Boolean(b) => out.push(u8::from(*b)),
            Value::Int32(n) => out.extend_from_slice(&n.to_le_bytes()),
            Value::User(_, payload) => out.extend_from_slice(payload),
            Value::Null | Value::Bytes(_) | Value::Stream(_) => unreachable!(),
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

pub fn write_7bit(out: &mut Vec<u8>, mut value: u32) {
    while value >= 0x80 {
        out.push((value as u8) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

pub fn write_string(out: &mut Vec<u8>, s: &str) {
    write_7bit(out, s.len() as u32);
    out.extend_from_slice(s.as_bytes());
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([0, 128, 255, 255]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
    bytes
}

/// A binary-serialized `System.Drawing.Bitmap` wrapping `image`
pub fn serialized_bitmap(image: &[u8]) -> Vec<u8> {
    // Serialization header and class record, abbreviated
    let mut blob = vec![
        0x00, 0x01, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x01, 0x00, 0x00, 0x00,
    ];
    blob.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x05, 0x01, 0x00, 0x00, 0x00]);
    write_string(&mut blob, "System.Drawing.Bitmap");
    blob.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]);
    write_string(&mut blob, "Data");
    blob.extend_from_slice(&[0x07, 0x02, 0x02, 0x00, 0x00, 0x00]);

    // Single primitive byte array
    blob.push(0x0F);
    blob.extend_from_slice(&3i32.to_le_bytes());
    blob.extend_from_slice(&(image.len() as i32).to_le_bytes());
    blob.push(0x02);
    blob.extend_from_slice(image);
    blob.push(0x0B);
    blob
}
