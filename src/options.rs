use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, Result};
use crate::shared::{PlacementMode, PlayArea};

/// Tunables for a game session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Size of the window and the play area.
    pub(crate) area: PlayArea,
    /// Side length of the mover square.
    pub(crate) mover_size: u32,
    /// Side length of the target square.
    pub(crate) target_size: u32,
    /// Pixels moved per directional key press.
    pub(crate) step: i32,
    /// How long a success or error flash stays on screen.
    pub(crate) flash_hold_ms: u64,
    /// How the target is relocated after a success.
    pub(crate) placement: PlacementMode,
    /// Seed for target placement. None to seed from the OS.
    pub(crate) seed: Option<u64>,
    /// Directory holding the image assets.
    pub(crate) asset_dir: PathBuf,
    /// Upper bound on frames rendered per second.
    pub(crate) frame_rate: u32,
    /// Background clear colour.
    pub(crate) background: (u8, u8, u8),
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            area: PlayArea::new(1920, 1080),
            mover_size: 150,
            target_size: 100,
            step: 10,
            flash_hold_ms: 50,
            placement: PlacementMode::Random,
            seed: None,
            asset_dir: PathBuf::from(Self::DEFAULT_ASSET_DIR),
            frame_rate: 60,
            background: (255, 209, 220),
        }
    }
}

#[allow(dead_code)]
impl GameOptions {
    /// Default location of the image assets, relative to the working directory.
    pub(crate) const DEFAULT_ASSET_DIR: &'static str = "assets";
    /// Overrides the asset directory.
    pub(crate) const ENV_ASSET_DIR: &'static str = "BLOCK_MOVER_ASSETS";
    /// Seeds target placement.
    pub(crate) const ENV_SEED: &'static str = "BLOCK_MOVER_SEED";
    /// Any value switches target placement to the fixed anchor.
    pub(crate) const ENV_FIXED: &'static str = "BLOCK_MOVER_FIXED";

    /// Default options with any overrides found in the environment applied.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(dir) = lookup(Self::ENV_ASSET_DIR) {
            options = options.asset_dir(dir);
        }

        if let Some(raw) = lookup(Self::ENV_SEED) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => options = options.seed(seed),
                Err(why) => log::warn!("Ignoring {}={raw}: {why}", Self::ENV_SEED),
            }
        }

        if lookup(Self::ENV_FIXED).is_some() {
            options = options.placement(PlacementMode::Fixed);
        }

        options
    }

    /// Sets the play area (and window) size.
    pub fn area(mut self, width: u32, height: u32) -> Self {
        self.area = PlayArea::new(width, height);
        self
    }

    /// Sets the side length of the mover.
    pub fn mover_size(mut self, size: u32) -> Self {
        self.mover_size = size;
        self
    }

    /// Sets the side length of the target.
    pub fn target_size(mut self, size: u32) -> Self {
        self.target_size = size;
        self
    }

    /// Sets the pixels moved per key press.
    pub fn step(mut self, step: i32) -> Self {
        self.step = step;
        self
    }

    /// Sets how long a flash is held in milliseconds.
    pub fn flash_hold_ms(mut self, hold_ms: u64) -> Self {
        self.flash_hold_ms = hold_ms;
        self
    }

    /// Sets how the target is placed.
    pub fn placement(mut self, mode: PlacementMode) -> Self {
        self.placement = mode;
        self
    }

    /// Seeds target placement for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the directory the image assets are loaded from.
    pub fn asset_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.asset_dir = dir.into();
        self
    }

    /// Sets the frame rate cap.
    pub fn frame_rate(mut self, fps: u32) -> Self {
        self.frame_rate = fps;
        self
    }

    /// Flash hold time as a duration.
    #[inline]
    pub fn flash_hold(&self) -> Duration {
        Duration::from_millis(self.flash_hold_ms)
    }

    /// Ensures both squares fit the area and every size is non-zero.
    pub fn validate(&self) -> Result<()> {
        let PlayArea { width, height } = self.area;
        if width == 0 || height == 0 {
            return Err(AppError::InvalidOptions(format!(
                "play area must be non-empty, got {width}x{height}"
            )));
        }

        // Coordinates are signed, so each side must fit in an i32.
        let max_side = i32::MAX.unsigned_abs();
        if width > max_side || height > max_side {
            return Err(AppError::InvalidOptions(format!(
                "play area {width}x{height} exceeds {max_side} pixels per side"
            )));
        }

        for (name, size) in [("mover", self.mover_size), ("target", self.target_size)] {
            if size == 0 {
                return Err(AppError::InvalidOptions(format!("{name} size must be positive")));
            }
            if size >= width || size >= height {
                return Err(AppError::InvalidOptions(format!(
                    "{name} size {size} does not fit a {width}x{height} area"
                )));
            }
        }

        if self.step <= 0 {
            return Err(AppError::InvalidOptions(format!(
                "step must be positive, got {}",
                self.step
            )));
        }

        if self.frame_rate == 0 {
            return Err(AppError::InvalidOptions("frame rate must be positive".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_are_valid() {
        let options = GameOptions::default();
        assert_eq!(options.validate(), Ok(()));
        assert_eq!(options.area, PlayArea::new(1920, 1080));
        assert_eq!(options.flash_hold(), Duration::from_millis(50));

        let options = options.flash_hold_ms(120);
        assert_eq!(options.flash_hold(), Duration::from_millis(120));
    }

    #[test]
    fn rejects_oversized_square() {
        let options = GameOptions::default().area(320, 120).mover_size(150);
        assert!(matches!(options.validate(), Err(AppError::InvalidOptions(_))));
    }

    #[test]
    fn rejects_zero_step_and_sizes() {
        assert!(GameOptions::default().step(0).validate().is_err());
        assert!(GameOptions::default().target_size(0).validate().is_err());
        assert!(GameOptions::default().area(0, 1080).validate().is_err());
        assert!(GameOptions::default().frame_rate(0).validate().is_err());
    }

    #[test]
    fn rejects_area_beyond_signed_range() {
        let too_wide = GameOptions::default().area(u32::MAX, 1080);
        assert!(matches!(too_wide.validate(), Err(AppError::InvalidOptions(_))));

        let too_tall = GameOptions::default().area(1920, i32::MAX.unsigned_abs() + 1);
        assert!(matches!(too_tall.validate(), Err(AppError::InvalidOptions(_))));

        let widest = GameOptions::default().area(i32::MAX.unsigned_abs(), 1080);
        assert_eq!(widest.validate(), Ok(()));
    }

    #[test]
    fn lookup_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (GameOptions::ENV_ASSET_DIR, "/tmp/sprites"),
            (GameOptions::ENV_SEED, "42"),
            (GameOptions::ENV_FIXED, "1"),
        ]);

        let options = GameOptions::from_lookup(|key| env.get(key).map(|v| (*v).to_string()));
        assert_eq!(options.asset_dir, PathBuf::from("/tmp/sprites"));
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.placement, PlacementMode::Fixed);
    }

    #[test]
    fn bad_seed_is_ignored() {
        let options = GameOptions::from_lookup(|key| {
            (key == GameOptions::ENV_SEED).then(|| "not-a-number".to_string())
        });
        assert_eq!(options.seed, None);
        assert_eq!(options.placement, PlacementMode::Random);
    }
}
