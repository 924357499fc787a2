//! Backend bridge: commands from the UI thread, fetches on a tokio worker.

pub mod commands;
pub mod runtime;
