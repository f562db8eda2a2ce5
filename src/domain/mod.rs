// Domain layer: radar model, draw commands and the canvas port.

pub mod model;
pub mod ports;
pub mod scene;
