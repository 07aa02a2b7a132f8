// NOTE: powertrace Architecture
//
// raw journal text ──▶ providers (extract) ──▶ engine (normalize, reconstruct,
// summarize) ──▶ presentation (view model ──▶ text or JSON)
//
// Each stage owns its input and hands its output on by value. The reference
// instant `now` is taken once in Config and threaded through; nothing below
// this crate reads the clock.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
