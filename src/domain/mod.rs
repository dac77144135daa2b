// Domain layer: content records, page contexts and ports. No HTTP routing here.

pub mod model;
pub mod page;
pub mod ports;
