// Domain layer: line item model and the save port. No I/O here.

pub mod model;
pub mod ports;
