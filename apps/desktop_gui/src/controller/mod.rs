//! Controller layer: UI events, the fact adapter's state transitions, and
//! command orchestration.

pub mod adapter;
pub mod events;
pub mod orchestration;
pub mod shell;
