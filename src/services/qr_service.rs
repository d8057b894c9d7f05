use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::codecs::png::PngEncoder;
use image::{ImageEncoder, Rgb, RgbImage};
use qrcode::{EcLevel, QrCode};
use thiserror::Error;

use crate::errors::internal::QrError;
use crate::types::db::product;

pub const DEFAULT_BOX_SIZE: u32 = 10;
pub const DEFAULT_BORDER: u32 = 4;

/// Upper bounds on module size and quiet-zone width. Both arrive as
/// untrusted query input; without a cap a single request could demand a
/// raster of terabytes (or overflow the dimension arithmetic outright).
pub const MAX_BOX_SIZE: u32 = 100;
pub const MAX_BORDER: u32 = 50;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Error-correction level of a generated symbol (L/M/Q/H)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    Low,
    #[default]
    Medium,
    Quartile,
    High,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

/// Rendering options for a single QR image
///
/// `box_size` is the pixel width of one symbol module, `border` the number
/// of quiet-zone modules around the symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrStyle {
    pub box_size: u32,
    pub border: u32,
    pub fill_color: Rgb<u8>,
    pub back_color: Rgb<u8>,
    pub error_correction: ErrorCorrection,
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            box_size: DEFAULT_BOX_SIZE,
            border: DEFAULT_BORDER,
            fill_color: BLACK,
            back_color: WHITE,
            error_correction: ErrorCorrection::Medium,
        }
    }
}

impl QrStyle {
    /// Style with custom module and quiet-zone dimensions, default colors.
    ///
    /// A zero box size is bumped to 1 to keep the raster non-degenerate;
    /// oversized values are clamped to [`MAX_BOX_SIZE`] / [`MAX_BORDER`]
    /// rather than rejected, keeping the never-fails style contract.
    pub fn with_dimensions(box_size: u32, border: u32) -> Self {
        Self {
            box_size: box_size.clamp(1, MAX_BOX_SIZE),
            border: border.min(MAX_BORDER),
            ..Self::default()
        }
    }

    /// Apply untrusted fill/back color inputs.
    ///
    /// Colors are validated before any rendering happens. When either value
    /// fails to resolve, both stay at the default black/white pair - a bad
    /// color degrades the output, it never fails the request.
    pub fn with_colors(mut self, fill: Option<&str>, back: Option<&str>) -> Self {
        let fill = fill.map(resolve_color);
        let back = back.map(resolve_color);

        if matches!(fill, Some(None)) || matches!(back, Some(None)) {
            tracing::debug!("unresolvable color parameter, using default black/white");
            return self;
        }
        if let Some(Some(color)) = fill {
            self.fill_color = color;
        }
        if let Some(Some(color)) = back {
            self.back_color = color;
        }
        self
    }
}

/// Resolve a color descriptor to a pixel value
///
/// Accepts `#rgb` / `#rrggbb` hex notation and the common CSS color names.
pub fn resolve_color(input: &str) -> Option<Rgb<u8>> {
    let value = input.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return match hex.len() {
            3 => {
                let mut rgb = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let nibble = c.to_digit(16)? as u8;
                    rgb[i] = nibble * 17;
                }
                Some(Rgb(rgb))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Rgb([r, g, b]))
            }
            _ => None,
        };
    }

    let rgb = match value.to_ascii_lowercase().as_str() {
        "black" => [0, 0, 0],
        "white" => [255, 255, 255],
        "red" => [255, 0, 0],
        "green" => [0, 128, 0],
        "lime" => [0, 255, 0],
        "blue" => [0, 0, 255],
        "yellow" => [255, 255, 0],
        "cyan" | "aqua" => [0, 255, 255],
        "magenta" | "fuchsia" => [255, 0, 255],
        "gray" | "grey" => [128, 128, 128],
        "silver" => [192, 192, 192],
        "maroon" => [128, 0, 0],
        "olive" => [128, 128, 0],
        "navy" => [0, 0, 128],
        "teal" => [0, 128, 128],
        "purple" => [128, 0, 128],
        "orange" => [255, 165, 0],
        "pink" => [255, 192, 203],
        "brown" => [165, 42, 42],
        _ => return None,
    };
    Some(Rgb(rgb))
}

/// One entry of a batch QR response, PNG pre-encoded as base64
#[derive(Debug, Clone)]
pub struct BatchQrEntry {
    pub id: i32,
    pub name: String,
    pub qr_code: String,
}

/// Rejection reasons for a batch selection, checked before any encoding work
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BatchSelectionError {
    #[error("No products selected")]
    Empty,

    #[error("Too many products selected (limit {limit})")]
    TooLarge { limit: usize },
}

/// Stateless QR image service
///
/// Turns canonical product URLs into PNG-encoded QR symbols. The only
/// configuration it carries is the public base URL for building those
/// links and the batch size cap.
pub struct QrService {
    public_base_url: String,
    batch_limit: usize,
}

impl QrService {
    pub fn new(public_base_url: impl Into<String>, batch_limit: usize) -> Self {
        Self {
            public_base_url: public_base_url.into(),
            batch_limit,
        }
    }

    /// Canonical detail-page URL for a product
    pub fn product_url(&self, product_id: i32) -> String {
        format!("{}/products/{}", self.public_base_url, product_id)
    }

    /// Validate the number of ids submitted to a batch request
    pub fn check_selection(&self, requested: usize) -> Result<(), BatchSelectionError> {
        if requested == 0 {
            return Err(BatchSelectionError::Empty);
        }
        if requested > self.batch_limit {
            return Err(BatchSelectionError::TooLarge {
                limit: self.batch_limit,
            });
        }
        Ok(())
    }

    /// Encode `data` as a QR symbol and rasterize it to PNG bytes
    ///
    /// Deterministic: identical input and style produce byte-identical PNGs.
    pub fn render_png(&self, data: &str, style: &QrStyle) -> Result<Vec<u8>, QrError> {
        let code = QrCode::with_error_correction_level(data, style.error_correction.into())
            .map_err(|source| QrError::Encode { source })?;

        let modules = code.width() as u32;
        // Re-clamp here so directly constructed styles are bounded too
        let box_size = style.box_size.clamp(1, MAX_BOX_SIZE);
        let border = style.border.min(MAX_BORDER);
        let img_size = (modules + 2 * border) * box_size;

        let mut img: RgbImage = RgbImage::from_pixel(img_size, img_size, style.back_color);

        for y in 0..modules {
            for x in 0..modules {
                if code[(x as usize, y as usize)] != qrcode::Color::Dark {
                    continue;
                }
                let px = (border + x) * box_size;
                let py = (border + y) * box_size;
                for dy in 0..box_size {
                    for dx in 0..box_size {
                        img.put_pixel(px + dx, py + dy, style.fill_color);
                    }
                }
            }
        }

        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(img.as_raw(), img_size, img_size, image::ColorType::Rgb8)
            .map_err(|source| QrError::PngEncode { source })?;

        Ok(png)
    }

    /// Render the QR symbol for a product's canonical URL
    pub fn render_product(&self, product_id: i32, style: &QrStyle) -> Result<Vec<u8>, QrError> {
        self.render_png(&self.product_url(product_id), style)
    }

    /// Render a product QR with default styling, base64-encoded for embedding
    pub fn render_product_base64(&self, product_id: i32) -> Result<String, QrError> {
        let png = self.render_product(product_id, &QrStyle::default())?;
        Ok(BASE64.encode(png))
    }

    /// Render default-styled QR images for an already-resolved product set
    ///
    /// Output order follows the input order; callers pass products in the
    /// order the catalog query returned them.
    pub fn render_batch(&self, products: &[product::Model]) -> Result<Vec<BatchQrEntry>, QrError> {
        let style = QrStyle::default();
        products
            .iter()
            .map(|p| {
                let png = self.render_product(p.id, &style)?;
                Ok(BatchQrEntry {
                    id: p.id,
                    name: p.name.clone(),
                    qr_code: BASE64.encode(png),
                })
            })
            .collect()
    }

    /// Attachment filename for a downloadable product QR
    ///
    /// The display name is untrusted; everything outside `[A-Za-z0-9 _-]`
    /// is stripped and the remainder trimmed before wrapping it as
    /// `QR_<name>.png`.
    pub fn attachment_filename(display_name: &str) -> String {
        let clean: String = display_name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
            .collect();
        format!("QR_{}.png", clean.trim())
    }
}
