//! Integration tests for epoxy-rs crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the epoxy-rs crates, plus the shared fixtures they use.

use epoxy_core::RgbaImage;
use sha2::{Digest, Sha256};

#[cfg(test)]
mod golden;
#[cfg(test)]
mod properties;

/// Deterministic pseudo-random RGBA image (xorshift32), alpha included.
pub fn noise_image(width: u32, height: u32, seed: u32) -> RgbaImage {
    let mut state = seed.max(1);
    let data = (0..width as usize * height as usize * 4)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect();
    RgbaImage::from_raw(width, height, data).unwrap_or_default()
}

/// Photo-like test image: a lighter "wall" over a darker textured "floor".
pub fn room_image(width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::filled(width, height, [0, 0, 0, 255]);
    for y in 0..height {
        let row = image.row_mut(y);
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let x = x as u32;
            let wall = y < height / 2;
            let base: u32 = if wall { 200 } else { 90 };
            let grain = (x * 7 + y * 3) % 23;
            px[0] = (base + grain) as u8;
            px[1] = (base - 10 + grain) as u8;
            px[2] = (base - 25 + grain / 2) as u8;
        }
    }
    image
}

/// Hex SHA-256 of a byte buffer.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use epoxy_io::{DataUri, Format};
    use epoxy_style::{DEFAULT_STYLE, resolve};
    use epoxy_visualizer::{VisualizeRequest, Visualizer, VisualizerConfig};
    use tempfile::tempdir;

    /// Full pipeline: PNG data URI -> render -> JPEG data URI.
    #[test]
    fn test_data_uri_pipeline() {
        let photo = room_image(48, 32);
        let uri = DataUri::encode(Format::Png.mime(), &epoxy_io::png::encode(&photo).unwrap());

        let viz = Visualizer::default();
        let out = viz
            .render_data_uri(&uri, "Metallic Epoksi", Some("Metalik Gümüş"))
            .unwrap();

        let parsed = DataUri::parse(&out).unwrap();
        assert_eq!(parsed.mime, "image/jpeg");
        assert_eq!(Format::from_bytes(&parsed.data), Format::Jpeg);
        let decoded = epoxy_io::decode(&parsed.data, parsed.mime_hint()).unwrap();
        assert_eq!(decoded.dimensions(), (48, 32));
    }

    /// Pipeline output before encoding equals the plain transform.
    #[test]
    fn test_render_bytes_matches_ops() {
        let photo = room_image(20, 15);
        let png = epoxy_io::png::encode(&photo).unwrap();

        let rendered = Visualizer::default()
            .render_bytes(&png, None, "Mermer Desenli Epoksi", Some("Sıcak Kahve Tonları"))
            .unwrap();
        let expected = epoxy_ops::apply_profile(
            &photo,
            epoxy_core::FloorRegion::detect(20, 15),
            &resolve("Mermer Desenli Epoksi", Some("Sıcak Kahve Tonları")),
        );
        assert_eq!(rendered.image, expected);
    }

    /// A JPEG-in, JPEG-out round trip through files.
    #[test]
    fn test_file_pipeline() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("room.jpg");
        let output = dir.path().join("room_epoxy.png");

        epoxy_io::write(&input, &room_image(40, 30)).unwrap();
        let loaded = epoxy_io::read(&input).unwrap();

        let rendered = Visualizer::default().render_image(&loaded, "Parlak Yüzey", None);
        epoxy_io::write(&output, &rendered.image).unwrap();

        let back = epoxy_io::read(&output).unwrap();
        assert_eq!(back, rendered.image);
        for y in 0..rendered.region.start_y {
            assert_eq!(back.row(y), loaded.row(y));
        }
    }

    /// The JSON request path produces the same image as the direct call.
    #[test]
    fn test_request_json_pipeline() {
        let photo = room_image(16, 16);
        let uri = DataUri::encode("image/png", &epoxy_io::png::encode(&photo).unwrap());
        let json = serde_json::json!({
            "image": uri,
            "style": "Endüstriyel Stil",
            "colorScheme": "Altın Dokunuşlar",
        })
        .to_string();

        let viz = Visualizer::default();
        let request = VisualizeRequest::from_json(&json).unwrap();
        let response = viz.handle(&request).unwrap();
        let direct = viz
            .render_data_uri(&request.image, "Endüstriyel Stil", Some("Altın Dokunuşlar"))
            .unwrap();

        assert_eq!(response.image, direct);
        assert_eq!(response.profile, resolve("Endüstriyel Stil", Some("Altın Dokunuşlar")));

        let value: serde_json::Value = serde_json::from_str(&response.to_json(false).unwrap()).unwrap();
        assert_eq!(value["width"], 16);
        assert_eq!(value["colorScheme"], "Altın Dokunuşlar");
    }

    /// Config from a YAML file changes the output quality.
    #[test]
    fn test_config_file_quality() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("epoxy.yaml");
        std::fs::write(&path, "jpeg_quality: 20\n").unwrap();

        let config = VisualizerConfig::from_file(&path).unwrap();
        let low = Visualizer::new(config);
        let high = Visualizer::new(VisualizerConfig::default().with_jpeg_quality(100));

        let image = noise_image(64, 64, 7);
        let low_len = low.encode_jpeg(&image).unwrap().len();
        let high_len = high.encode_jpeg(&image).unwrap().len();
        assert!(low_len < high_len);

        assert_eq!(low.resolve("", None).style, DEFAULT_STYLE);
        assert_eq!(high.resolve("", None).style, DEFAULT_STYLE);
    }

    #[test]
    fn test_undecodable_input() {
        let viz = Visualizer::default();
        let uri = DataUri::encode("image/jpeg", b"definitely not a jpeg");
        let err = viz.render_data_uri(&uri, "Metallic Epoksi", None).unwrap_err();
        assert!(err.is_decode_error());
    }
}
