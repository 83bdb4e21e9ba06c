#![forbid(unsafe_code)]

//! FrankenKit demo showcase
//!
//! Replays the three sample apps (counters, window size, phone book) as a
//! fixed script and prints each rendered frame.
//!
//! # Running
//!
//! ```sh
//! cargo run -p fkit-demo -- --scenario phone-book
//! FKIT_DEMO_CLICK_STEP=3 FKIT_LOG=fkit::changes=info cargo run -p fkit-demo
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod scenarios;

pub use cli::{Cli, DemoError, run, run_from_env};
pub use config::{ConfigError, ShowcaseConfig};
pub use scenarios::{Scenario, Transcript};
