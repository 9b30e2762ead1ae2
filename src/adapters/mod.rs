// Adapters layer: concrete implementations of the domain ports and the
// HTTP surface that exposes them.

pub mod http;
pub mod memory;
pub mod seed;
