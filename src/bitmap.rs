//! Recovery of rasters from serialized bitmap resources

use crate::container::SerializationFormat;
use image::DynamicImage;

// Binary serializer record layout: tag, object id (i32), length (i32), primitive type
const ARRAY_SINGLE_PRIMITIVE: u8 = 0x0F;
const PRIMITIVE_BYTE: u8 = 0x02;
const ARRAY_HEADER_LEN: usize = 10;

/// Decode the raster carried by a bitmap payload, if there is one
pub fn decode(format: SerializationFormat, payload: &[u8]) -> Option<DynamicImage> {
    match format {
        SerializationFormat::BinaryFormatter => find_embedded_image(payload),
        SerializationFormat::TypeConverterByteArray | SerializationFormat::ActivatorStream => {
            image::load_from_memory(payload).ok()
        }
        SerializationFormat::TypeConverterString => None,
    }
}

/// Scan a serialized object graph for a byte array that decodes as an image
fn find_embedded_image(blob: &[u8]) -> Option<DynamicImage> {
    (0..blob.len())
        .filter_map(|offset| byte_array_at(blob, offset))
        .find_map(|bytes| image::load_from_memory(bytes).ok())
}

fn byte_array_at(blob: &[u8], offset: usize) -> Option<&[u8]> {
    let record = blob.get(offset..offset + ARRAY_HEADER_LEN)?;
    if record[0] != ARRAY_SINGLE_PRIMITIVE || record[9] != PRIMITIVE_BYTE {
        return None;
    }
    let len = i32::from_le_bytes([record[5], record[6], record[7], record[8]]);
    let len = usize::try_from(len).ok()?;
    let start = offset + ARRAY_HEADER_LEN;
    blob.get(start..start.checked_add(len)?)
}
