// Domain layer: request/result models and the engine ports.

pub mod model;
pub mod ports;
