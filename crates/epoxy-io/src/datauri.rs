//! `data:` URI parsing and formatting.
//!
//! Only base64 payloads are accepted, which is what browsers produce for
//! `canvas.toDataURL` and `FileReader.readAsDataURL`:
//!
//! ```text
//! data:image/jpeg;base64,/9j/4AAQSkZJRg...
//! ```

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::{IoError, IoResult};

const SCHEME: &str = "data:";
const BASE64_PARAM: &str = "base64";

/// A decoded `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    /// Declared media type, lowercased, without parameters. Empty if absent.
    pub mime: String,
    /// Decoded payload bytes.
    pub data: Vec<u8>,
}

impl DataUri {
    /// Parses `data:<mime>[;params];base64,<payload>`.
    ///
    /// Surrounding whitespace is ignored, as is ASCII whitespace inside the
    /// payload (line-wrapped base64).
    ///
    /// ```rust
    /// use epoxy_io::DataUri;
    ///
    /// let uri = DataUri::parse("data:image/png;base64,AAEC").unwrap();
    /// assert_eq!(uri.mime, "image/png");
    /// assert_eq!(uri.data, vec![0, 1, 2]);
    /// ```
    pub fn parse(input: &str) -> IoResult<Self> {
        let input = input.trim();
        let rest = strip_prefix_ignore_case(input, SCHEME)
            .ok_or_else(|| IoError::InvalidDataUri("missing \"data:\" prefix".into()))?;

        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| IoError::InvalidDataUri("missing ',' separator".into()))?;

        let mut parts = header.split(';');
        let mime = parts.next().unwrap_or("").trim().to_ascii_lowercase();
        if !parts.any(|p| p.trim().eq_ignore_ascii_case(BASE64_PARAM)) {
            return Err(IoError::InvalidDataUri("payload is not base64 encoded".into()));
        }

        let data = if payload.bytes().any(|b| b.is_ascii_whitespace()) {
            let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
            STANDARD.decode(compact)
        } else {
            STANDARD.decode(payload)
        }
        .map_err(|e| IoError::InvalidDataUri(e.to_string()))?;

        Ok(Self { mime, data })
    }

    /// Formats `bytes` as `data:<mime>;base64,<payload>`.
    ///
    /// ```rust
    /// use epoxy_io::DataUri;
    ///
    /// assert_eq!(DataUri::encode("image/jpeg", &[0, 1, 2]), "data:image/jpeg;base64,AAEC");
    /// ```
    pub fn encode(mime: &str, bytes: &[u8]) -> String {
        let payload = STANDARD.encode(bytes);
        let mut out = String::with_capacity(SCHEME.len() + mime.len() + 8 + payload.len());
        out.push_str(SCHEME);
        out.push_str(mime);
        out.push_str(";base64,");
        out.push_str(&payload);
        out
    }

    /// Declared MIME type, or `None` if the URI omitted it.
    pub fn mime_hint(&self) -> Option<&str> {
        if self.mime.is_empty() {
            None
        } else {
            Some(&self.mime)
        }
    }
}

impl std::fmt::Display for DataUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Self::encode(&self.mime, &self.data))
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let uri = DataUri::parse("  data:image/jpeg;base64,/9j/\n").unwrap();
        assert_eq!(uri.mime, "image/jpeg");
        assert_eq!(uri.data, vec![0xFF, 0xD8, 0xFF]);
    }

    #[test]
    fn test_parse_params_and_case() {
        let uri = DataUri::parse("DATA:Image/PNG;name=floor.png;BASE64,AAEC").unwrap();
        assert_eq!(uri.mime, "image/png");
        assert_eq!(uri.data, vec![0, 1, 2]);
    }

    #[test]
    fn test_parse_missing_mime() {
        let uri = DataUri::parse("data:;base64,AAEC").unwrap();
        assert_eq!(uri.mime_hint(), None);
    }

    #[test]
    fn test_parse_wrapped_payload() {
        let uri = DataUri::parse("data:image/png;base64,AA\r\nEC").unwrap();
        assert_eq!(uri.data, vec![0, 1, 2]);
    }

    #[test]
    fn test_parse_errors() {
        for bad in [
            "",
            "image/png;base64,AAEC",
            "data:image/png;base64",
            "data:image/png,AAEC",
            "data:image/png;base64,@@@@",
        ] {
            assert!(
                matches!(DataUri::parse(bad), Err(IoError::InvalidDataUri(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_non_ascii_input_does_not_panic() {
        assert!(DataUri::parse("dä").is_err());
        assert!(DataUri::parse("ğğğğğ").is_err());
    }

    #[test]
    fn test_display() {
        let uri = DataUri {
            mime: "image/png".into(),
            data: vec![0, 1, 2],
        };
        assert_eq!(uri.to_string(), "data:image/png;base64,AAEC");
    }
}
