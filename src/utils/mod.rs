mod timestep;

pub use timestep::Timestep;
