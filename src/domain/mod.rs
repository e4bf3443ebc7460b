// Domain layer: plain data and ports. Behaviour lives in `core`.

pub mod model;
pub mod ports;
