// Domain layer: configuration data shapes and the ports the engine consumes.

pub mod model;
pub mod ports;
