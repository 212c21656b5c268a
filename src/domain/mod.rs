// Domain layer: the module value type and the descriptor port. No external
// dependencies beyond std/serde.

pub mod model;
pub mod ports;
