//! Bridge between the egui thread and the async search worker.

pub mod commands;
pub mod runtime;
