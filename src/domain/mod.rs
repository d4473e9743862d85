// Domain layer: plain models and the ports the workspace talks through.

pub mod model;
pub mod ports;
