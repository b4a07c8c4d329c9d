pub mod density;
pub mod length;
pub mod mass;
pub mod velocity;

#[cfg(test)]
mod velocity_test;

pub use density::{Density, sphere_radius};
pub use length::Length;
pub use mass::{EARTH_MASSES_PER_SOLAR_MASS, Mass, SOLAR_MASS_KG};
pub use velocity::Velocity;
pub use velocity::mutual_escape_velocity;
