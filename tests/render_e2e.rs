//! End-to-end tests for the generator facade.
//!
//! These tests drive `Generator::generate` the way a front end would:
//! - Braille and ramp scenarios with known output
//! - Byte budget holds across aspect ratios and widths
//! - Invert produces complementary braille
//! - File validation outcomes
//! - Charset registration is per generator

use braille_art::ascii::BRAILLE_BASE;
use braille_art::{
    validate_file, FileRejection, GenerateOptions, Generator, Locale, PixelBuffer, RenderError,
};

/// Helper to create a test image with the specified pattern.
fn make_image(pattern: &str, width: u32, height: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = match pattern {
                "gradient_h" => ((x as f32 / width as f32) * 255.0) as u8,
                "gradient_v" => ((y as f32 / height as f32) * 255.0) as u8,
                "circle" => {
                    let cx = width as f32 / 2.0;
                    let cy = height as f32 / 2.0;
                    let r = cx.min(cy) * 0.8;
                    let d = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
                    if d < r {
                        20
                    } else {
                        235
                    }
                }
                "white" => 255,
                _ => 0,
            };
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    PixelBuffer::new(width, height, data).unwrap()
}

fn opts(width: u32, charset: &str, invert: bool, steam: bool) -> GenerateOptions {
    GenerateOptions {
        width,
        charset: charset.to_string(),
        invert,
        steam,
    }
}

// ==================== Braille Scenarios ====================

#[test]
fn test_black_2x2_single_full_cell() {
    let gen = Generator::new();
    let result = gen
        .generate(&make_image("black", 2, 2), &opts(1, "braille", false, false))
        .unwrap();
    assert_eq!(result.text, "\u{28FF}\n");
    assert_eq!(result.adjusted_width, Some(1));
}

#[test]
fn test_default_is_braille() {
    let gen = Generator::new();
    let img = make_image("circle", 40, 40);
    let a = gen.generate(&img, &opts(10, "default", false, false)).unwrap();
    let b = gen.generate(&img, &opts(10, "braille", false, false)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_white_image_is_blank_braille() {
    let gen = Generator::new();
    let result = gen
        .generate(&make_image("white", 20, 20), &opts(5, "braille", false, false))
        .unwrap();
    for line in result.text.lines() {
        assert!(line.chars().all(|c| c == BRAILLE_BASE));
    }
}

#[test]
fn test_braille_dimensions() {
    let gen = Generator::new();
    // 2:1 landscape, 20 chars -> 40x20 px -> 5 rows
    let result = gen
        .generate(&make_image("gradient_h", 200, 100), &opts(20, "braille", false, false))
        .unwrap();
    let lines: Vec<&str> = result.text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|l| l.chars().count() == 20));
    assert!(result.text.ends_with('\n'));
}

#[test]
fn test_braille_is_deterministic() {
    let gen = Generator::new();
    let img = make_image("gradient_v", 64, 48);
    let a = gen.generate(&img, &opts(30, "braille", false, false)).unwrap();
    let b = gen.generate(&img, &opts(30, "braille", false, false)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_gradient_shows_variation() {
    let gen = Generator::new();
    let result = gen
        .generate(&make_image("gradient_h", 120, 60), &opts(30, "braille", false, false))
        .unwrap();
    let distinct: std::collections::HashSet<char> =
        result.text.chars().filter(|&c| c != '\n').collect();
    assert!(distinct.len() > 3, "only {} distinct cells", distinct.len());
}

#[test]
fn test_invert_complements_every_cell() {
    let gen = Generator::new();
    for pattern in ["gradient_h", "gradient_v", "circle"] {
        let img = make_image(pattern, 37, 23);
        let normal = gen.generate(&img, &opts(11, "braille", false, false)).unwrap();
        let inverted = gen.generate(&img, &opts(11, "braille", true, false)).unwrap();
        assert_eq!(normal.text.len(), inverted.text.len());
        for (a, b) in normal.text.chars().zip(inverted.text.chars()) {
            if a == '\n' {
                assert_eq!(b, '\n');
            } else {
                let base = BRAILLE_BASE as u32;
                assert_eq!((a as u32 - base) ^ (b as u32 - base), 0xFF, "{}", pattern);
            }
        }
    }
}

// ==================== Byte Budget ====================

#[test]
fn test_steam_output_under_1000_bytes() {
    let gen = Generator::new();
    let sizes = [
        (100, 100),
        (640, 480),
        (480, 640),
        (1920, 1080),
        (1080, 1920),
        (37, 500),
        (800, 90),
        (3, 7),
    ];
    for (w, h) in sizes {
        let img = make_image("circle", w, h);
        for width in [1, 5, 20, 50, 100, 300] {
            let result = gen.generate(&img, &opts(width, "braille", false, true)).unwrap();
            let body = result.text.strip_suffix('\n').unwrap_or(&result.text);
            assert!(
                body.len() < 1000,
                "{}x{} @ {}: {} bytes",
                w,
                h,
                width,
                body.len()
            );
            let fitted = result.adjusted_width.unwrap();
            assert!(fitted >= 1 && fitted <= width);
        }
    }
}

#[test]
fn test_steam_narrows_width() {
    let gen = Generator::new();
    let result = gen
        .generate(&make_image("circle", 100, 100), &opts(100, "braille", false, true))
        .unwrap();
    assert_eq!(result.adjusted_width, Some(25));
    assert_eq!(result.text.lines().count(), 13);
}

#[test]
fn test_steam_small_request_unchanged() {
    let gen = Generator::new();
    let img = make_image("circle", 100, 100);
    let plain = gen.generate(&img, &opts(10, "braille", false, false)).unwrap();
    let steam = gen.generate(&img, &opts(10, "braille", false, true)).unwrap();
    assert_eq!(plain, steam);
}

#[test]
fn test_steam_very_tall_image_trims_rows() {
    let gen = Generator::new();
    let result = gen
        .generate(&make_image("black", 1, 2000), &opts(40, "braille", false, true))
        .unwrap();
    assert_eq!(result.adjusted_width, Some(1));
    let body = result.text.strip_suffix('\n').unwrap();
    assert!(body.len() < 1000);
    assert!(!body.is_empty());
}

#[test]
fn test_steam_ignored_for_ramps() {
    let gen = Generator::new();
    let img = make_image("gradient_h", 100, 100);
    let plain = gen.generate(&img, &opts(200, "standard", false, false)).unwrap();
    let steam = gen.generate(&img, &opts(200, "standard", false, true)).unwrap();
    assert_eq!(plain, steam);
    assert_eq!(steam.adjusted_width, None);
}

// ==================== Ramp Scenarios ====================

#[test]
fn test_ramp_white_10x10() {
    let gen = Generator::new();
    let result = gen
        .generate(&make_image("white", 10, 10), &opts(4, "@ ", false, false))
        .unwrap();
    // height = round(4 * 1 * 0.5) = 2; white maps to the first character
    assert_eq!(result.text, "@@@@\n@@@@\n");
    assert_eq!(result.adjusted_width, None);
}

#[test]
fn test_ramp_black_10x10() {
    let gen = Generator::new();
    let result = gen
        .generate(&make_image("black", 10, 10), &opts(4, "@ ", false, false))
        .unwrap();
    assert_eq!(result.text, "    \n    \n");
}

#[test]
fn test_ramp_invert_flips() {
    let gen = Generator::new();
    let result = gen
        .generate(&make_image("white", 10, 10), &opts(4, "@ ", true, false))
        .unwrap();
    assert_eq!(result.text, "    \n    \n");
}

#[test]
fn test_ramp_single_char() {
    let gen = Generator::new();
    let result = gen
        .generate(&make_image("gradient_h", 30, 30), &opts(6, "#", false, false))
        .unwrap();
    assert_eq!(result.text, "######\n######\n######\n");
}

#[test]
fn test_block_charset_uses_block_chars() {
    let gen = Generator::new();
    let result = gen
        .generate(&make_image("gradient_h", 64, 32), &opts(16, "block", false, false))
        .unwrap();
    assert!(result
        .text
        .chars()
        .all(|c| c == '\n' || "░▒▓█".contains(c)));
    assert_eq!(result.text.lines().count(), 4);
}

// ==================== Charset Registry ====================

#[test]
fn test_register_charset_per_generator() {
    let mut a = Generator::new();
    let b = Generator::new();
    a.register_charset("mine", "xy").unwrap();

    let img = make_image("black", 8, 8);
    let from_a = a.generate(&img, &opts(2, "mine", false, false)).unwrap();
    // In `b`, "mine" is not registered, so it is a literal ramp "m", "i", "n", "e"
    let from_b = b.generate(&img, &opts(2, "mine", false, false)).unwrap();
    assert_eq!(from_a.text, "yy\n");
    assert_eq!(from_b.text, "ee\n");
}

#[test]
fn test_register_empty_charset_fails() {
    let mut gen = Generator::new();
    assert!(matches!(
        gen.register_charset("blank", ""),
        Err(RenderError::EmptyCharset { .. })
    ));
}

#[test]
fn test_custom_placeholder_ramp() {
    let gen = Generator::new();
    let result = gen
        .generate(&make_image("black", 8, 8), &opts(2, "custom", false, false))
        .unwrap();
    // Black maps to the last character of the placeholder ramp
    assert_eq!(result.text, "⡿⡿\n");
}

// ==================== File Validation ====================

#[test]
fn test_validate_gif_rejected() {
    let v = validate_file("image/gif", 1000);
    assert!(!v.is_valid());
    assert!(matches!(
        v.rejection(),
        Some(FileRejection::UnsupportedType { .. })
    ));
    assert_eq!(v.reason(Locale::En), Some("Only JPG and PNG images are supported"));
}

#[test]
fn test_validate_oversize_png_rejected() {
    let v = validate_file("image/png", 11 * 1024 * 1024);
    assert!(!v.is_valid());
    assert!(matches!(v.rejection(), Some(FileRejection::TooLarge { .. })));
    assert_eq!(v.reason(Locale::Zh), Some("图片大小不能超过 10MB"));
}

#[test]
fn test_validate_small_jpeg_accepted() {
    let v = Generator::validate_file("image/jpeg", 500);
    assert!(v.is_valid());
    assert!(v.rejection().is_none());
}
