use std::path::{Path, PathBuf};

use sdl3::pixels::PixelFormat;
use sdl3::render::{Texture, TextureCreator};
use sdl3::surface::Surface;
use sdl3::video::WindowContext;

use crate::error::{AppError, Result};

/// Images used by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Asset {
    Target,       // Stationary square.
    Mover,        // Player-controlled square.
    ErrorFlash,   // Full-screen overlay after hitting a wall.
    SuccessFlash, // Full-screen overlay after reaching the target.
}

impl Asset {
    /// All assets, in load order.
    pub const ALL: [Asset; 4] = [
        Asset::Target,
        Asset::Mover,
        Asset::ErrorFlash,
        Asset::SuccessFlash,
    ];

    /// File name of the image within the asset directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Asset::Target => "grey.png",
            Asset::Mover => "LaCroixKitten.png",
            Asset::ErrorFlash => "red.png",
            Asset::SuccessFlash => "green.png",
        }
    }

    /// Full path of the image within `dir`.
    pub fn path_in(self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Owns one texture per `Asset`. Textures are released when the set is dropped.
pub(crate) struct TextureSet<'a> {
    textures: Vec<Texture<'a>>,
}

impl<'a> TextureSet<'a> {
    /// Loads every asset from `dir`. Fails on the first missing or corrupt image.
    pub fn load(creator: &'a TextureCreator<WindowContext>, dir: &Path) -> Result<Self> {
        let mut textures = Vec::with_capacity(Asset::ALL.len());
        for asset in Asset::ALL {
            let path = asset.path_in(dir);
            textures.push(load_texture(creator, &path)?);
            log::debug!("Loaded {}.", path.display());
        }

        Ok(Self { textures })
    }

    /// Obtains the texture for an asset.
    pub fn get(&self, asset: Asset) -> &Texture<'a> {
        &self.textures[asset.index()]
    }
}

/// Decodes an image file into RGBA pixels.
pub(crate) fn decode_rgba(path: &Path) -> Result<(Vec<u8>, u32, u32)> {
    let image = image::open(path)
        .map_err(|why| AppError::asset(path, why))?
        .to_rgba8();

    let (width, height) = image.dimensions();
    Ok((image.into_raw(), width, height))
}

/// Decodes an image and uploads it as a texture.
fn load_texture<'a>(creator: &'a TextureCreator<WindowContext>, path: &Path) -> Result<Texture<'a>> {
    let (mut pixels, width, height) = decode_rgba(path)?;

    // Byte order R, G, B, A in memory.
    let surface = Surface::from_data(
        &mut pixels,
        width,
        height,
        width * 4,
        PixelFormat::ABGR8888,
    )
    .map_err(|why| AppError::asset(path, why))?;

    creator
        .create_texture_from_surface(&surface)
        .map_err(|why| AppError::asset(path, why))
}
