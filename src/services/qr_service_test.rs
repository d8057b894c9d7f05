use image::Rgb;

use crate::services::qr_service::{
    resolve_color, BatchSelectionError, QrService, QrStyle, MAX_BORDER, MAX_BOX_SIZE,
};

fn service() -> QrService {
    QrService::new("http://localhost:3000", 100)
}

#[test]
fn test_product_url_uses_base_and_id() {
    let svc = service();
    assert_eq!(svc.product_url(42), "http://localhost:3000/products/42");
}

#[test]
fn test_resolve_named_colors() {
    assert_eq!(resolve_color("black"), Some(Rgb([0, 0, 0])));
    assert_eq!(resolve_color("WHITE"), Some(Rgb([255, 255, 255])));
    assert_eq!(resolve_color(" navy "), Some(Rgb([0, 0, 128])));
}

#[test]
fn test_resolve_hex_colors() {
    assert_eq!(resolve_color("#ff0000"), Some(Rgb([255, 0, 0])));
    assert_eq!(resolve_color("#0f0"), Some(Rgb([0, 255, 0])));
}

#[test]
fn test_resolve_invalid_colors() {
    assert_eq!(resolve_color("notacolor"), None);
    assert_eq!(resolve_color("#12345"), None);
    assert_eq!(resolve_color("#gggggg"), None);
    assert_eq!(resolve_color(""), None);
}

#[test]
fn test_style_applies_valid_colors() {
    let style = QrStyle::default().with_colors(Some("red"), Some("#000080"));
    assert_eq!(style.fill_color, Rgb([255, 0, 0]));
    assert_eq!(style.back_color, Rgb([0, 0, 128]));
}

#[test]
fn test_style_falls_back_as_a_pair_on_bad_color() {
    let default = QrStyle::default();

    let style = QrStyle::default().with_colors(Some("notacolor"), Some("red"));
    assert_eq!(style.fill_color, default.fill_color);
    assert_eq!(style.back_color, default.back_color);

    let style = QrStyle::default().with_colors(Some("red"), Some("notacolor"));
    assert_eq!(style.fill_color, default.fill_color);
    assert_eq!(style.back_color, default.back_color);
}

#[test]
fn test_style_without_color_params_keeps_defaults() {
    let style = QrStyle::default().with_colors(None, None);
    assert_eq!(style, QrStyle::default());
}

#[test]
fn test_with_dimensions_bumps_zero_box_size() {
    let style = QrStyle::with_dimensions(0, 4);
    assert_eq!(style.box_size, 1);

    let style = QrStyle::with_dimensions(3, 0);
    assert_eq!(style.box_size, 3);
    assert_eq!(style.border, 0);
}

#[test]
fn test_with_dimensions_clamps_oversized_values() {
    let style = QrStyle::with_dimensions(u32::MAX, u32::MAX);
    assert_eq!(style.box_size, MAX_BOX_SIZE);
    assert_eq!(style.border, MAX_BORDER);

    let style = QrStyle::with_dimensions(MAX_BOX_SIZE, MAX_BORDER);
    assert_eq!(style.box_size, MAX_BOX_SIZE);
    assert_eq!(style.border, MAX_BORDER);
}

#[test]
fn test_check_selection_rejects_empty() {
    let svc = service();
    assert_eq!(svc.check_selection(0), Err(BatchSelectionError::Empty));
}

#[test]
fn test_check_selection_rejects_over_limit() {
    let svc = QrService::new("http://localhost:3000", 5);
    assert_eq!(
        svc.check_selection(6),
        Err(BatchSelectionError::TooLarge { limit: 5 })
    );
    assert_eq!(svc.check_selection(5), Ok(()));
    assert_eq!(svc.check_selection(1), Ok(()));
}

#[test]
fn test_render_png_is_valid_and_deterministic() {
    let svc = service();
    let style = QrStyle::default();

    let first = svc.render_png("http://localhost:3000/products/1", &style).unwrap();
    let second = svc.render_png("http://localhost:3000/products/1", &style).unwrap();

    assert!(!first.is_empty());
    // PNG magic bytes
    assert_eq!(&first[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    assert_eq!(first, second);
}

#[test]
fn test_render_png_dimensions_follow_style() {
    let svc = service();
    let style = QrStyle::with_dimensions(3, 2);

    let png = svc.render_png("http://localhost:3000/products/7", &style).unwrap();
    let img = image::load_from_memory(&png).unwrap();

    // Square raster, side = (modules + 2 * border) * box_size
    assert_eq!(img.width(), img.height());
    assert_eq!(img.width() % 3, 0);
    let modules = img.width() / 3 - 2 * 2;
    assert!(modules >= 21, "smallest QR symbol is 21 modules wide");
}

#[test]
fn test_invalid_color_output_matches_default_output() {
    let svc = service();
    let url = "http://localhost:3000/products/9";

    let default_png = svc
        .render_png(url, &QrStyle::default().with_colors(None, None))
        .unwrap();
    let fallback_png = svc
        .render_png(url, &QrStyle::default().with_colors(Some("notacolor"), Some("alsobad")))
        .unwrap();

    assert_eq!(default_png, fallback_png);
}

#[test]
fn test_attachment_filename_strips_unsafe_characters() {
    assert_eq!(
        QrService::attachment_filename("Widget #1/2 (Blue)!"),
        "QR_Widget 12 Blue.png"
    );
    assert_eq!(QrService::attachment_filename("plain-name_1"), "QR_plain-name_1.png");
    assert_eq!(QrService::attachment_filename("  padded  "), "QR_padded.png");
    assert_eq!(QrService::attachment_filename("///"), "QR_.png");
}
