pub mod spatial;
pub mod entities;
pub mod store;
pub mod matching;
pub mod lifecycle;
pub mod billing;
pub mod command;
pub mod service;
pub mod runner;
pub mod telemetry;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
