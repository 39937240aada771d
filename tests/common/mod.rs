#![allow(dead_code)]

use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use std::io::Cursor;

pub const HEADER_LINE: &str = "FILENAME,RESOLUTION,TIMESTAMP,DATESTAMP,ALTITUDE,LATITUDE,LONGITUDE";

fn field(tag: Tag, value: Value) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value,
    }
}

fn ascii(tag: Tag, text: &str) -> Field {
    field(tag, Value::Ascii(vec![text.as_bytes().to_vec()]))
}

fn rational(tag: Tag, pairs: &[(u32, u32)]) -> Field {
    field(
        tag,
        Value::Rational(
            pairs
                .iter()
                .map(|&(num, denom)| Rational { num, denom })
                .collect(),
        ),
    )
}

/// Capture time and 640x480 pixel dimensions.
pub fn camera_fields() -> Vec<Field> {
    vec![
        ascii(Tag::DateTimeOriginal, "2016:05:04 03:02:01"),
        field(Tag::PixelXDimension, Value::Long(vec![640])),
        field(Tag::PixelYDimension, Value::Long(vec![480])),
    ]
}

/// 1°30'0" N, 2°0'0" W at 123.4 m.
pub fn gps_fields() -> Vec<Field> {
    vec![
        rational(Tag::GPSLatitude, &[(1, 1), (30, 1), (0, 1)]),
        ascii(Tag::GPSLatitudeRef, "N"),
        rational(Tag::GPSLongitude, &[(2, 1), (0, 1), (0, 1)]),
        ascii(Tag::GPSLongitudeRef, "W"),
        rational(Tag::GPSAltitude, &[(1234, 10)]),
        field(Tag::GPSAltitudeRef, Value::Byte(vec![0])),
    ]
}

pub fn full_fields() -> Vec<Field> {
    let mut fields = camera_fields();
    fields.extend(gps_fields());
    fields
}

fn encode(format: ImageOutputFormat) -> Vec<u8> {
    let image = RgbImage::from_pixel(8, 6, Rgb([200, 120, 40]));
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image)
        .write_to(&mut buf, format)
        .unwrap();
    buf.into_inner()
}

fn tiff(fields: &[Field]) -> Vec<u8> {
    let mut writer = Writer::new();
    for f in fields {
        writer.push_field(f);
    }
    let mut buf = Cursor::new(Vec::new());
    writer.write(&mut buf, false).unwrap();
    buf.into_inner()
}

/// An 8x6 JPEG carrying `fields` in an APP1 Exif segment right after SOI.
pub fn jpeg_with_exif(fields: &[Field]) -> Vec<u8> {
    let jpeg = encode(ImageOutputFormat::Jpeg(90));
    if fields.is_empty() {
        return jpeg;
    }

    let tiff = tiff(fields);
    let segment_len = u16::try_from(2 + 6 + tiff.len()).unwrap();
    let mut out = Vec::with_capacity(jpeg.len() + tiff.len() + 10);
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(&tiff);
    out.extend_from_slice(&jpeg[2..]);
    out
}

pub fn plain_png() -> Vec<u8> {
    encode(ImageOutputFormat::Png)
}

/// An 8x6 PNG carrying `fields` in an `eXIf` chunk right after IHDR.
pub fn png_with_exif(fields: &[Field]) -> Vec<u8> {
    // 8-byte signature, then IHDR: length, type, 13 data bytes, CRC.
    const IHDR_END: usize = 8 + 4 + 4 + 13 + 4;

    let png = plain_png();
    let tiff = tiff(fields);
    let mut chunk = Vec::with_capacity(tiff.len() + 12);
    chunk.extend_from_slice(&u32::try_from(tiff.len()).unwrap().to_be_bytes());
    chunk.extend_from_slice(b"eXIf");
    chunk.extend_from_slice(&tiff);
    chunk.extend_from_slice(&crc32fast::hash(&chunk[4..]).to_be_bytes());

    let mut out = Vec::with_capacity(png.len() + chunk.len());
    out.extend_from_slice(&png[..IHDR_END]);
    out.extend_from_slice(&chunk);
    out.extend_from_slice(&png[IHDR_END..]);
    out
}

/// Lays out a photo folder with three readable images, one corrupt JPEG and
/// two files that do not match the default extensions.
pub fn photo_dir(temp: &TempDir) -> ChildPath {
    let dir = temp.child("photos");
    dir.create_dir_all().unwrap();
    dir.child("full.jpg")
        .write_binary(&jpeg_with_exif(&full_fields()))
        .unwrap();
    dir.child("nogps.jpg")
        .write_binary(&jpeg_with_exif(&camera_fields()))
        .unwrap();
    dir.child("noexif.png").write_binary(&plain_png()).unwrap();
    dir.child("broken.jpg")
        .write_binary(b"\xFF\xD8 truncated")
        .unwrap();
    dir.child("notes.txt").write_str("not an image").unwrap();
    dir.child("raw.tif").write_binary(&plain_png()).unwrap();
    dir
}
