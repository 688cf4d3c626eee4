//! Window icon and font loading.
//!
//! Both assets are optional: callers get a typed error and fall back to the
//! defaults egui ships with.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];
const FONT_SEARCH_DEPTH: usize = 4;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode PNG {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: png::DecodingError,
    },
    #[error("unsupported PNG layout in {}: {color_type:?} at {bit_depth:?}", path.display())]
    UnsupportedPng {
        path: PathBuf,
        color_type: png::ColorType,
        bit_depth: png::BitDepth,
    },
    #[error("font family '{0}' not found in system font directories")]
    FontNotFound(String),
}

/// Decoded RGBA8 pixels, ready for `egui::IconData`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decode a PNG file into RGBA8.
pub fn load_png_rgba(path: &Path) -> Result<RgbaImage, AssetError> {
    let file = File::open(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let decode_err = |source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = decoder.read_info().map_err(decode_err)?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(decode_err)?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(AssetError::UnsupportedPng {
            path: path.to_path_buf(),
            color_type: info.color_type,
            bit_depth: info.bit_depth,
        });
    }

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        other => {
            return Err(AssetError::UnsupportedPng {
                path: path.to_path_buf(),
                color_type: other,
                bit_depth: info.bit_depth,
            })
        }
    };

    Ok(RgbaImage {
        rgba,
        width: info.width,
        height: info.height,
    })
}

/// Directories the platform usually keeps fonts in.
pub fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    #[cfg(target_os = "windows")]
    {
        let windir = std::env::var_os("WINDIR").unwrap_or_else(|| "C:\\Windows".into());
        dirs.push(PathBuf::from(windir).join("Fonts"));
    }

    #[cfg(target_os = "macos")]
    {
        dirs.push(PathBuf::from("/System/Library/Fonts"));
        dirs.push(PathBuf::from("/Library/Fonts"));
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        dirs.push(PathBuf::from("/usr/share/fonts"));
        dirs.push(PathBuf::from("/usr/local/share/fonts"));
    }

    if let Some(base) = directories::BaseDirs::new() {
        #[cfg(target_os = "macos")]
        dirs.push(base.home_dir().join("Library/Fonts"));
        #[cfg(all(unix, not(target_os = "macos")))]
        {
            dirs.push(base.data_local_dir().join("fonts"));
            dirs.push(base.home_dir().join(".fonts"));
        }
        #[cfg(target_os = "windows")]
        dirs.push(base.data_local_dir().join("Microsoft\\Windows\\Fonts"));
    }

    dirs
}

/// Find a font file for `family` under any of `dirs`.
pub fn find_font_file(family: &str, dirs: &[PathBuf]) -> Result<PathBuf, AssetError> {
    let wanted = normalize_font_name(family);
    let wanted_regular = format!("{}regular", wanted);

    dirs.iter()
        .filter(|dir| dir.is_dir())
        .flat_map(|dir| {
            WalkDir::new(dir)
                .max_depth(FONT_SEARCH_DEPTH)
                .follow_links(true)
                .into_iter()
                .filter_map(|entry| entry.ok())
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| has_font_extension(path))
        .find(|path| {
            path.file_stem()
                .map(|stem| normalize_font_name(&stem.to_string_lossy()))
                .is_some_and(|stem| stem == wanted || stem == wanted_regular)
        })
        .ok_or_else(|| AssetError::FontNotFound(family.to_string()))
}

/// Read the bytes of the font file for `family`.
pub fn load_font_bytes(family: &str, dirs: &[PathBuf]) -> Result<Vec<u8>, AssetError> {
    let path = find_font_file(family, dirs)?;
    std::fs::read(&path).map_err(|source| AssetError::Io { path, source })
}

fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| FONT_EXTENSIONS.contains(&ext.as_str()))
}

fn normalize_font_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
