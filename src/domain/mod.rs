// Domain layer: standings model, ports, and the pure ranking/merging services.
// Nothing in here performs I/O.

pub mod model;
pub mod ports;

pub mod services;
