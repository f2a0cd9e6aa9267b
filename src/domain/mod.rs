// Domain layer: dataset model, rendered view model and ports.

pub mod model;
pub mod ports;
pub mod view;
