mod placement;
mod rect;

pub use placement::{PlacementMode, place_target};
pub use rect::{PlayArea, Rectangle};
