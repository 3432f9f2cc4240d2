// Domain layer: models and ports. Only std/serde beyond the error type.

pub mod model;
pub mod ports;
