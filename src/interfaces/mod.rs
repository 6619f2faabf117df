//! Adapters between the outside world and the application layer: where the
//! six loan answers come from and how the schedule is printed.

pub mod input;
pub mod output;
