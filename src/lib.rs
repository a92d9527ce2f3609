pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, System, NVec3, NMat4};
pub use simulation::catalog::solar_system;
pub use simulation::orbit::{advance, place_bodies};
pub use simulation::impactor::{CollisionOutcome, Impactor, IMPACT_ORDER};
pub use simulation::camera::{fixed_look, look_at_inverse, CameraBasis, CameraState, ViewMode};
pub use simulation::input::FrameInput;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, ScenarioConfig};

pub use visualization::solsim_vis3d::run_3d;

pub use benchmark::benchmark::{bench_step, bench_step_curve};
