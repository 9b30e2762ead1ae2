// Domain layer: entity models, the storage port, and the schema rules for
// data crossing the trust boundary.

pub mod model;
pub mod ports;
pub mod schema;
