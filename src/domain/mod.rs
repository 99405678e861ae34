// Domain layer: raw records, item variants and ports (interfaces).

pub mod items;
pub mod model;
pub mod ports;
