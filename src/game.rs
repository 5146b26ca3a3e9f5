use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::options::GameOptions;
use crate::shared::{PlacementMode, PlayArea, Rectangle, place_target};

/// One of the four directions the mover can be pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset for the direction in screen coordinates (y grows downward).
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Event raised when a frame is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Success, // Mover reached the target, target relocated.
    Error,   // Mover hit a wall, mover recentered.
}

/// Current phase of the interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    SuccessFlash,
    ErrorFlash,
}

/// Mover and target state plus the rules connecting them. Holds no SDL resources.
pub struct Game {
    area: PlayArea,
    mover: Rectangle,
    target: Rectangle,
    step: i32,
    placement: PlacementMode,
    state: Interaction,
    rng: StdRng,
}

impl Game {
    /// Creates a game with the mover centered and the target placed.
    pub fn new(options: &GameOptions) -> Self {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let area = options.area;
        let target = place_target(
            options.target_size,
            options.target_size,
            area,
            options.placement,
            &mut rng,
        );

        Self {
            area,
            mover: Rectangle::centered(options.mover_size, options.mover_size, area),
            target,
            step: options.step,
            placement: options.placement,
            state: Interaction::Idle,
            rng,
        }
    }

    #[inline]
    pub fn mover(&self) -> &Rectangle {
        &self.mover
    }

    #[inline]
    pub fn target(&self) -> &Rectangle {
        &self.target
    }

    #[inline]
    pub fn state(&self) -> Interaction {
        self.state
    }

    #[inline]
    pub fn area(&self) -> PlayArea {
        self.area
    }

    /// Moves the mover one step in the given direction.
    pub fn apply(&mut self, direction: Direction) {
        let (dx, dy) = direction.offset();
        self.mover
            .translate(dx.saturating_mul(self.step), dy.saturating_mul(self.step));
    }

    /// Checks the mover against the target and the walls. At most one event fires per call.
    pub fn resolve(&mut self) -> Option<Flash> {
        if self.mover.overlaps(&self.target) {
            self.relocate_target();
            self.state = Interaction::SuccessFlash;
            log::debug!(
                "Target reached, relocated to ({}, {}).",
                self.target.x,
                self.target.y
            );
            return Some(Flash::Success);
        }

        if self.mover.out_of_bounds(self.area) {
            log::debug!(
                "Mover left the area at ({}, {}), recentering.",
                self.mover.x,
                self.mover.y
            );
            self.mover.center_in(self.area);
            self.state = Interaction::ErrorFlash;
            return Some(Flash::Error);
        }

        self.state = Interaction::Idle;
        None
    }

    /// Ends the current flash.
    pub fn finish_flash(&mut self) {
        self.state = Interaction::Idle;
    }

    /// Generates a new position for the target.
    fn relocate_target(&mut self) {
        self.target = place_target(
            self.target.width,
            self.target.height,
            self.area,
            self.placement,
            &mut self.rng,
        );
    }
}
