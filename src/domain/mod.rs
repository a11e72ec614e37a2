// Domain layer: value types and the traits the engine is written against.

pub mod model;
pub mod ports;
