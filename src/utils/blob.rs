use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Binary payload stored as text, either bare base64 or a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBlob {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

pub fn decode(raw: &str) -> Result<DecodedBlob, base64::DecodeError> {
    let raw = raw.trim();
    let (declared, payload) = match raw.strip_prefix("data:") {
        Some(rest) => match rest.split_once(',') {
            Some((meta, data)) => (
                meta.strip_suffix(";base64")
                    .filter(|m| !m.is_empty())
                    .map(str::to_string),
                data,
            ),
            None => (None, rest),
        },
        None => (None, raw),
    };

    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(compact.as_bytes())?;
    let content_type = declared.unwrap_or_else(|| sniff(&bytes).to_string());
    Ok(DecodedBlob {
        bytes,
        content_type,
    })
}

fn sniff(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"%PDF") {
        "application/pdf"
    } else if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF8") {
        "image/gif"
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else if bytes.starts_with(b"<svg") || bytes.starts_with(b"<?xml") {
        "image/svg+xml"
    } else {
        "application/octet-stream"
    }
}
