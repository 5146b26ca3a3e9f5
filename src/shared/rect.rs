/// Fixed-size region `{0, 0, width, height}` the mover must stay inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayArea {
    pub width: u32,  // Width (x-axis).
    pub height: u32, // Height (y-axis).
}

impl PlayArea {
    /// Creates a new play area.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width as a signed coordinate.
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn max_x(&self) -> i32 {
        self.width as i32
    }

    /// Height as a signed coordinate.
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn max_y(&self) -> i32 {
        self.height as i32
    }
}

/// An axis-aligned rectangle in pixel coordinates, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub x: i32,      // Left edge.
    pub y: i32,      // Top edge.
    pub width: u32,  // Width (x-axis).
    pub height: u32, // Height (y-axis).
}

impl Rectangle {
    /// Creates a new rectangle.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle of the given size centered within the area.
    pub fn centered(width: u32, height: u32, area: PlayArea) -> Self {
        let mut rect = Self::new(0, 0, width, height);
        rect.center_in(area);
        rect
    }

    /// Right edge (exclusive).
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width as i32)
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height as i32)
    }

    /// Moves the rectangle so it sits in the middle of the area.
    #[allow(clippy::cast_possible_wrap)]
    pub fn center_in(&mut self, area: PlayArea) {
        self.x = (area.max_x() - self.width as i32) / 2;
        self.y = (area.max_y() - self.height as i32) / 2;
    }

    /// Shifts the rectangle by the given offset.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    /// Checks if two rectangles overlap. Both axis projections must intersect; touching edges do not count.
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Checks if the rectangle touches or crosses any edge of the area.
    pub fn out_of_bounds(&self, area: PlayArea) -> bool {
        self.x <= 0 || self.right() >= area.max_x() || self.y <= 0 || self.bottom() >= area.max_y()
    }
}

impl From<Rectangle> for sdl3::render::FRect {
    #[allow(clippy::cast_precision_loss)]
    fn from(rect: Rectangle) -> sdl3::render::FRect {
        sdl3::render::FRect::new(
            rect.x as f32,
            rect.y as f32,
            rect.width as f32,
            rect.height as f32,
        )
    }
}
