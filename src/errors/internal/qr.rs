use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("QR symbol encoding failed: {source}")]
    Encode {
        #[source]
        source: qrcode::types::QrError,
    },

    #[error("PNG encoding failed: {source}")]
    PngEncode {
        #[source]
        source: image::ImageError,
    },
}
