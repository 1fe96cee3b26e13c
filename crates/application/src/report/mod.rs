//! Export document builders.
//!
//! Each engine has one builder. All of them are pure functions of the run
//! summary (plus a clock where timestamps are rendered).

mod light;
mod step_normalizer;
mod steps;
mod xray;

pub use light::LightExporter;
pub use step_normalizer::StepNormalizer;
pub use steps::StepsExporter;
pub use xray::XrayExporter;
