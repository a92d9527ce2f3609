pub mod states;
pub mod params;
pub mod catalog;
pub mod orbit;
pub mod impactor;
pub mod camera;
pub mod input;
pub mod scenario;
