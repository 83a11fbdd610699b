//! PNG data URL codec for persisted canvas snapshots.
//!
//! Matches what `HTMLCanvasElement.toDataURL()` produces, so a snapshot written
//! by the browser surface decodes natively and the other way round.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::SurfaceError;

pub const PNG_MIME: &str = "image/png";
const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

pub fn encode_png_data_url(png: &[u8]) -> String {
    let mut url = String::with_capacity(PNG_DATA_URL_PREFIX.len() + png.len().div_ceil(3) * 4);
    url.push_str(PNG_DATA_URL_PREFIX);
    STANDARD.encode_string(png, &mut url);
    url
}

pub fn decode_png_data_url(url: &str) -> Result<Vec<u8>, SurfaceError> {
    let payload = url
        .trim()
        .strip_prefix(PNG_DATA_URL_PREFIX)
        .ok_or(SurfaceError::NotADataUrl)?;
    STANDARD
        .decode(payload)
        .map_err(|error| SurfaceError::Base64(error.to_string()))
}

pub fn is_png_data_url(url: &str) -> bool {
    url.trim_start().starts_with(PNG_DATA_URL_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_bytes_in_png_data_url() {
        let url = encode_png_data_url(&[0x89, b'P', b'N', b'G']);
        assert_eq!(url, "data:image/png;base64,iVBORw==");
        assert!(is_png_data_url(&url));
        assert_eq!(decode_png_data_url(&url).unwrap(), vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn rejects_other_urls() {
        assert_eq!(
            decode_png_data_url("data:image/jpeg;base64,AAAA"),
            Err(SurfaceError::NotADataUrl)
        );
        assert_eq!(decode_png_data_url(""), Err(SurfaceError::NotADataUrl));
        assert!(matches!(
            decode_png_data_url("data:image/png;base64,@@@"),
            Err(SurfaceError::Base64(_))
        ));
    }
}
