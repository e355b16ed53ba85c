// Domain layer: outcome models and the ports the core drives. No external dependencies.

pub mod model;
pub mod ports;
