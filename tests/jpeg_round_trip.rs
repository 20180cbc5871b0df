#![cfg(feature = "jpeg")]

use greyscale_lab_rs::imaging::{Image, ImageError, JpegConfig, StandardJpegCodec};

/// JPEG is lossy; flat 8x8 blocks come back within a couple of levels.
const TOLERANCE: f32 = 3.0;

fn expected_sample(value: f32) -> f32 {
    value.clamp(0.0, 255.0).trunc()
}

fn assert_round_trip(original: &Image, reloaded: &Image) {
    assert_eq!(reloaded.width(), original.width());
    assert_eq!(reloaded.height(), original.height());

    for row in 0..original.height() {
        for col in 0..original.width() {
            let expected = expected_sample(original.at(col, row).unwrap());
            let actual = reloaded.at(col, row).unwrap();
            assert!(
                (actual - expected).abs() <= TOLERANCE,
                "pixel ({col}, {row}): expected {expected}, got {actual}"
            );
        }
    }
}

#[test]
fn test_uniform_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("uniform.jpg");
    let original = Image::filled(100.0, 16, 8).unwrap();

    original.save_jpeg(&path).unwrap();
    let mut reloaded = Image::open(&path).unwrap();

    assert_round_trip(&original, &reloaded);
    assert!(!reloaded.stats_up_to_date());
    assert!((reloaded.average_value() - 100.0).abs() <= TOLERANCE);
}

#[test]
fn test_round_trip_clamps_out_of_range_values() {
    let dir = tempfile::tempdir().unwrap();
    let low = dir.path().join("low.jpg");
    let high = dir.path().join("high.jpg");

    Image::filled(-40.0, 8, 8).unwrap().save_jpeg(&low).unwrap();
    Image::filled(400.0, 8, 8).unwrap().save_jpeg(&high).unwrap();

    let mut low = Image::open(&low).unwrap();
    let mut high = Image::open(&high).unwrap();

    assert!(low.max_value() <= TOLERANCE);
    assert!(high.min_value() >= 255.0 - TOLERANCE);
}

#[test]
fn test_flat_blocks_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blocks.jpg");

    // Four 8x8 blocks of different constant values.
    let values = [20.0, 90.0, 160.0, 230.0];
    let mut original = Image::filled(0.0, 16, 16).unwrap();
    for row in 0..16 {
        for col in 0..16 {
            let block = (row / 8) * 2 + col / 8;
            original.set(col, row, values[block]).unwrap();
        }
    }

    let codec = StandardJpegCodec::new(JpegConfig::builder().quality(95).build());
    original.save_jpeg_with(&codec, &path).unwrap();
    let reloaded = Image::open_with(&codec, &path).unwrap();

    // Block edges ring a little, so compare block centres only.
    for (block, &value) in values.iter().enumerate() {
        let col = (block % 2) * 8 + 4;
        let row = (block / 2) * 8 + 4;
        let actual = reloaded.at(col, row).unwrap();
        assert!(
            (actual - value).abs() <= 2.0 * TOLERANCE,
            "block {block}: expected {value}, got {actual}"
        );
    }
}

#[test]
fn test_load_into_existing_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("replace.jpg");
    Image::filled(200.0, 8, 16).unwrap().save_jpeg(&path).unwrap();

    let mut image = Image::from_buffer(&[1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
    image.load(&path).unwrap();

    assert_eq!(image.width(), 8);
    assert_eq!(image.height(), 16);
    assert_round_trip(&Image::filled(200.0, 8, 16).unwrap(), &image);
}

#[test]
fn test_missing_file_leaves_image_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut image = Image::filled(3.0, 2, 2).unwrap();

    let err = image.load(dir.path().join("missing.jpg")).unwrap_err();

    assert!(matches!(err, ImageError::CannotOpen { .. }));
    assert_eq!(image, Image::filled(3.0, 2, 2).unwrap());
}

#[test]
fn test_saving_empty_image_fails() {
    let dir = tempfile::tempdir().unwrap();

    let err = Image::new().save_jpeg(dir.path().join("empty.jpg")).unwrap_err();

    assert!(matches!(err, ImageError::InvalidDimensions { .. }));
}
