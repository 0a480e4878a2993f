// Domain layer: schedule models and ports (interfaces). No dependencies
// beyond chrono/serde.

pub mod model;
pub mod ports;
