use crates_image::ImageEncoder;
use image::{ImageError, decode_image, load_image};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("overlay-image-{}-{}", std::process::id(), name))
}

fn write_png(name: &str, width: u32, height: u32) -> PathBuf {
    let img = crates_image::RgbImage::from_fn(width, height, |x, y| {
        crates_image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let path = fixture_path(name);
    img.save(&path).expect("failed to write fixture");
    path
}

#[test]
fn test_load_png_dimensions() {
    let path = write_png("dims.png", 800, 400);

    let buffer = load_image(&path).unwrap();
    assert_eq!(buffer.shape(), &[400, 800, 3]);
    assert_eq!(buffer.height(), 400);
    assert_eq!(buffer.width(), 800);
    assert_eq!(buffer.channels(), 3);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_load_png_pixels_are_rgb() {
    let path = write_png("pixels.png", 4, 2);

    let buffer = load_image(&path).unwrap();
    // pixel (x=3, y=1)
    let idx = (4 + 3) * 3;
    assert_eq!(&buffer.data()[idx..idx + 3], &[3, 1, 128]);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_load_jpeg_dimensions() {
    let img = crates_image::RgbImage::from_pixel(16, 8, crates_image::Rgb([10, 20, 30]));
    let path = fixture_path("dims.jpg");
    img.save(&path).unwrap();

    let buffer = load_image(&path).unwrap();
    assert_eq!(buffer.shape(), &[8, 16, 3]);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_load_missing_file() {
    let path = fixture_path("does-not-exist.jpg");

    match load_image(&path) {
        Err(ImageError::ResourceLoad { path: reported, .. }) => {
            assert!(reported.ends_with("does-not-exist.jpg"));
        }
        other => panic!("Expected ResourceLoad, got {:?}", other),
    }
}

#[test]
fn test_load_corrupt_file() {
    let path = fixture_path("corrupt.jpg");
    std::fs::write(&path, b"definitely not a jpeg").unwrap();

    let result = load_image(&path);
    assert!(matches!(result, Err(ImageError::ResourceLoad { .. })));

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_decode_rgba_png_drops_alpha() {
    let mut bytes = Vec::new();
    let img = crates_image::RgbaImage::from_pixel(3, 2, crates_image::Rgba([1, 2, 3, 4]));
    crates_image::codecs::png::PngEncoder::new(&mut bytes)
        .write_image(img.as_raw(), 3, 2, crates_image::ExtendedColorType::Rgba8)
        .unwrap();

    let buffer = decode_image(&bytes).unwrap();
    assert_eq!(buffer.shape(), &[2, 3, 3]);
    assert_eq!(&buffer.data()[..3], &[1, 2, 3]);
}

#[test]
fn test_decode_grayscale_png_expands_to_rgb() {
    let mut bytes = Vec::new();
    let img = crates_image::GrayImage::from_pixel(2, 2, crates_image::Luma([77]));
    crates_image::codecs::png::PngEncoder::new(&mut bytes)
        .write_image(img.as_raw(), 2, 2, crates_image::ExtendedColorType::L8)
        .unwrap();

    let buffer = decode_image(&bytes).unwrap();
    assert_eq!(buffer.channels(), 3);
    assert!(buffer.data().iter().all(|&v| v == 77));
}

#[test]
fn test_decode_empty_bytes() {
    match decode_image(&[]) {
        Err(ImageError::ResourceLoad { path, .. }) => assert_eq!(path, "<memory>"),
        other => panic!("Expected ResourceLoad, got {:?}", other),
    }
}

#[test]
fn test_resource_load_display() {
    let err = load_image(fixture_path("missing.png")).unwrap_err();
    assert!(err.to_string().starts_with("failed to load "));
}
