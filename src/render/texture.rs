//! Texture images: decoded from PNG files, or generated procedurally when no
//! texture directory is configured.

use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    channels: u8,
    pixels: Vec<u8>,
}

impl Image {
    pub fn new(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Texture(format!("invalid dimensions {width}x{height}")));
        }
        if !matches!(channels, 1 | 3 | 4) {
            return Err(Error::Texture(format!("unsupported channel count {channels}")));
        }

        let expected = width as usize * height as usize * channels as usize;
        if pixels.len() != expected {
            return Err(Error::Texture(format!(
                "expected {expected} bytes of pixel data, got {}",
                pixels.len()
            )));
        }

        Ok(Self {
            width,
            height,
            channels,
            pixels,
        })
    }

    /// Decodes an image file, flipped so the first row is the bottom of the
    /// picture as OpenGL expects.
    pub fn load(path: &Path) -> Result<Self> {
        let decoded = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| Error::Texture(format!("{}: {}", path.display(), e)))?
            .flipv();

        let (width, height) = (decoded.width(), decoded.height());
        let (channels, pixels) = match decoded {
            DynamicImage::ImageLuma8(luma) => (1, luma.into_raw()),
            other if other.color().has_alpha() => (4, other.into_rgba8().into_raw()),
            other => (3, other.into_rgb8().into_raw()),
        };

        debug!("Decoded {} ({}x{}, {} channels).", path.display(), width, height, channels);
        Self::new(width, height, channels, pixels)
    }

    /// Loads `<dir>/<file_name>` when a texture directory is configured,
    /// otherwise generates the stand-in image.
    pub fn resolve(
        file_name: &str,
        dir: Option<&Path>,
        procedural: impl FnOnce() -> Result<Self>,
    ) -> Result<Self> {
        match dir {
            Some(dir) => Self::load(&dir.join(file_name)),
            None => procedural(),
        }
    }

    fn from_fn(size: u32, mut texel: impl FnMut(u32, u32) -> [u8; 3]) -> Result<Self> {
        let mut pixels = Vec::with_capacity(size as usize * size as usize * 3);
        for y in 0..size {
            for x in 0..size {
                pixels.extend_from_slice(&texel(x, y));
            }
        }

        Self::new(size, size, 3, pixels)
    }

    /// Square checkerboard with `cells` squares per side.
    pub fn checkerboard(size: u32, cells: u32, light: [u8; 3], dark: [u8; 3]) -> Result<Self> {
        if cells == 0 || cells > size {
            return Err(Error::Texture(format!("cannot fit {cells} cells in {size} texels")));
        }

        let cell = size / cells;
        Self::from_fn(size, |x, y| {
            if ((x / cell) + (y / cell)) % 2 == 0 {
                light
            } else {
                dark
            }
        })
    }

    /// Wooden crate face: horizontal planks inside a darker frame.
    pub fn crate_panel(size: u32) -> Result<Self> {
        let frame = (size / 8).max(1);
        let plank = (size / 5).max(1);

        Self::from_fn(size, |x, y| {
            if Self::in_frame(x, y, size, frame) {
                return [92, 58, 28];
            }

            // Seams between planks, plus a cheap grain from the column index.
            if y % plank == 0 {
                [70, 44, 20]
            } else {
                let grain = ((x * 7 + (y / plank) * 13) % 11) as u8;
                [168 + grain, 116 + grain, 62 + grain / 2]
            }
        })
    }

    /// Specular map for [`Image::crate_panel`]: a shiny metal frame around
    /// a matte wooden centre.
    pub fn crate_specular(size: u32) -> Result<Self> {
        let frame = (size / 8).max(1);

        Self::from_fn(size, |x, y| {
            if Self::in_frame(x, y, size, frame) {
                [200, 200, 200]
            } else {
                [16, 16, 16]
            }
        })
    }

    fn in_frame(x: u32, y: u32, size: u32, frame: u32) -> bool {
        x < frame || y < frame || x >= size - frame || y >= size - frame
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let stride = self.channels as usize;
        let start = (y as usize * self.width as usize + x as usize) * stride;
        self.pixels.get(start..start + stride)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_pixel_data() {
        assert!(Image::new(2, 2, 3, vec![0; 11]).is_err());
        assert!(Image::new(0, 2, 3, Vec::new()).is_err());
        assert!(Image::new(2, 2, 2, vec![0; 8]).is_err());
        assert!(Image::new(2, 2, 4, vec![0; 16]).is_ok());
    }

    #[test]
    fn checkerboard_alternates_cells() {
        let image = Image::checkerboard(8, 4, [255; 3], [0; 3]).unwrap();

        assert_eq!(image.pixel(0, 0), Some(&[255, 255, 255][..]));
        assert_eq!(image.pixel(2, 0), Some(&[0, 0, 0][..]));
        assert_eq!(image.pixel(2, 2), Some(&[255, 255, 255][..]));
        assert_eq!(image.pixels().len(), 8 * 8 * 3);
    }

    #[test]
    fn crate_specular_highlights_only_the_frame() {
        let image = Image::crate_specular(64).unwrap();

        assert_eq!(image.pixel(0, 10), Some(&[200, 200, 200][..]));
        assert_eq!(image.pixel(63, 63), Some(&[200, 200, 200][..]));
        assert_eq!(image.pixel(32, 32), Some(&[16, 16, 16][..]));
    }

    #[test]
    fn crate_panel_frame_matches_its_specular_map() {
        let diffuse = Image::crate_panel(64).unwrap();
        let specular = Image::crate_specular(64).unwrap();

        assert_eq!(diffuse.width(), specular.width());
        assert_eq!(diffuse.pixel(3, 40), Some(&[92, 58, 28][..]));
        assert_ne!(diffuse.pixel(32, 33), Some(&[92, 58, 28][..]));
    }

    #[test]
    fn pixel_outside_the_image_is_none() {
        let image = Image::checkerboard(8, 4, [255; 3], [0; 3]).unwrap();

        assert!(image.pixel(7, 7).is_some());
        assert_eq!(image.pixel(8, 0), None);
        assert_eq!(image.pixel(0, 8), None);
    }

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir_name = format!("gl-tutorials-tex-{name}-{}", std::process::id());
        let dir = std::env::temp_dir().join(dir_name);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn load_decodes_png_bottom_row_first() {
        let dir = scratch_dir("decode");
        let path = dir.join("gradient.png");
        let source =
            image::RgbImage::from_fn(3, 2, |x, y| image::Rgb([x as u8 * 10, y as u8 * 100, 7]));
        source.save(&path).unwrap();

        let loaded = Image::load(&path).unwrap();

        assert_eq!((loaded.width(), loaded.height(), loaded.channels()), (3, 2, 3));
        // Row 0 of the texture is the last row of the file.
        assert_eq!(loaded.pixel(2, 0), Some(&[20, 100, 7][..]));
        assert_eq!(loaded.pixel(0, 1), Some(&[0, 0, 7][..]));
    }

    #[test]
    fn load_keeps_alpha_channel() {
        let dir = scratch_dir("alpha");
        let path = dir.join("alpha.png");
        image::RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 4])).save(&path).unwrap();

        let loaded = Image::load(&path).unwrap();
        assert_eq!(loaded.channels(), 4);
        assert_eq!(loaded.pixel(1, 1), Some(&[1, 2, 3, 4][..]));
    }

    #[test]
    fn load_reports_missing_file() {
        let result = Image::load(Path::new("no/such/texture.png"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn load_rejects_undecodable_data() {
        let dir = scratch_dir("garbage");
        let path = dir.join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(matches!(Image::load(&path), Err(Error::Texture(_))));
    }

    #[test]
    fn resolve_uses_procedural_image_only_without_a_directory() {
        let fallback = || Image::crate_specular(16);

        let generated = Image::resolve("crate.png", None, fallback).unwrap();
        assert_eq!(generated, Image::crate_specular(16).unwrap());

        let dir = scratch_dir("resolve");
        assert!(matches!(
            Image::resolve("crate.png", Some(&dir), fallback),
            Err(Error::Io(_))
        ));
    }
}
