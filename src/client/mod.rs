mod assets;
mod core;
mod input;

pub use self::core::ClientCore;
