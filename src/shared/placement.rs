use rand::Rng;

use super::rect::{PlayArea, Rectangle};

/// How the target is positioned when it is created or relocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementMode {
    /// Always the same anchor point, used for deterministic runs.
    Fixed,
    /// Uniform over the area, excluding the central cell.
    #[default]
    Random,
}

/// Anchor used by `PlacementMode::Fixed`, clamped into the valid range of smaller areas.
pub const FIXED_ANCHOR: (i32, i32) = (1601, 373);

/// Number of samples drawn before falling back to the origin corner.
const MAX_ATTEMPTS: u32 = 64;

/// Highest valid origin on each axis so the whole rectangle stays inside the area.
#[allow(clippy::cast_possible_wrap)]
fn max_origin(width: u32, height: u32, area: PlayArea) -> (i32, i32) {
    let max_x = area.width.saturating_sub(width) as i32;
    let max_y = area.height.saturating_sub(height) as i32;
    (max_x, max_y)
}

/// Checks if the rectangle lies entirely within the middle cell of a 3x3 grid over the area.
pub fn in_center_cell(rect: &Rectangle, area: PlayArea) -> bool {
    let (third_x, third_y) = (area.max_x() / 3, area.max_y() / 3);

    rect.x >= third_x
        && rect.right() <= third_x * 2
        && rect.y >= third_y
        && rect.bottom() <= third_y * 2
}

/// Creates a rectangle for the target according to the placement mode.
pub fn place_target<R>(
    width: u32,
    height: u32,
    area: PlayArea,
    mode: PlacementMode,
    rng: &mut R,
) -> Rectangle
where
    R: Rng + ?Sized,
{
    let (max_x, max_y) = max_origin(width, height, area);

    match mode {
        PlacementMode::Fixed => Rectangle::new(
            FIXED_ANCHOR.0.min(max_x),
            FIXED_ANCHOR.1.min(max_y),
            width,
            height,
        ),

        PlacementMode::Random => {
            for _ in 0..MAX_ATTEMPTS {
                let x = rng.random_range(0..=max_x);
                let y = rng.random_range(0..=max_y);
                let candidate = Rectangle::new(x, y, width, height);
                if !in_center_cell(&candidate, area) {
                    return candidate;
                }
            }

            log::warn!("Target placement exhausted {MAX_ATTEMPTS} attempts, using the origin.");
            Rectangle::new(0, 0, width, height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const AREA: PlayArea = PlayArea::new(1920, 1080);

    #[test]
    fn fixed_returns_anchor() {
        let mut rng = StdRng::seed_from_u64(0);
        let rect = place_target(100, 100, AREA, PlacementMode::Fixed, &mut rng);
        assert_eq!(rect, Rectangle::new(1601, 373, 100, 100));
    }

    #[test]
    fn fixed_anchor_is_clamped_into_small_areas() {
        let mut rng = StdRng::seed_from_u64(0);
        let area = PlayArea::new(800, 600);
        let rect = place_target(100, 100, area, PlacementMode::Fixed, &mut rng);
        assert_eq!(rect, Rectangle::new(700, 373, 100, 100));
    }

    #[test]
    fn random_stays_in_range_and_avoids_center() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..10_000 {
            let rect = place_target(100, 100, AREA, PlacementMode::Random, &mut rng);
            assert!((0..=1820).contains(&rect.x), "x out of range: {rect:?}");
            assert!((0..=980).contains(&rect.y), "y out of range: {rect:?}");
            assert_eq!((rect.width, rect.height), (100, 100));
            assert!(!in_center_cell(&rect, AREA), "landed in center: {rect:?}");
        }
    }

    #[test]
    fn random_reaches_every_outer_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [[false; 3]; 3];

        for _ in 0..2_000 {
            let rect = place_target(100, 100, AREA, PlacementMode::Random, &mut rng);
            let col = usize::try_from(rect.x / 640).unwrap_or(0).min(2);
            let row = usize::try_from(rect.y / 360).unwrap_or(0).min(2);
            seen[row][col] = true;
        }

        for (row, cols) in seen.iter().enumerate() {
            for (col, hit) in cols.iter().enumerate() {
                if (row, col) != (1, 1) {
                    assert!(hit, "cell ({row}, {col}) never used");
                }
            }
        }
    }

    #[test]
    fn center_cell_detection() {
        assert!(in_center_cell(&Rectangle::new(640, 360, 100, 100), AREA));
        assert!(in_center_cell(&Rectangle::new(1180, 620, 100, 100), AREA));
        // Straddling the boundary is not "entirely within".
        assert!(!in_center_cell(&Rectangle::new(1181, 400, 100, 100), AREA));
        assert!(!in_center_cell(&Rectangle::new(639, 400, 100, 100), AREA));
        assert!(!in_center_cell(&Rectangle::new(0, 0, 100, 100), AREA));
    }

    #[test]
    fn rectangle_filling_area_is_pinned_to_origin() {
        let mut rng = StdRng::seed_from_u64(1);
        let area = PlayArea::new(100, 100);
        let rect = place_target(100, 100, area, PlacementMode::Random, &mut rng);
        assert_eq!(rect, Rectangle::new(0, 0, 100, 100));
    }
}
