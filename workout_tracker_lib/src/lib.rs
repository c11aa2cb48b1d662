pub mod config;
pub mod controller;
pub mod description;
pub mod error;
pub mod kind;
pub mod metrics;
pub mod projection;
pub mod storage;
pub mod validation;
pub mod workout;

pub use config::TrackerConfig;
pub use error::{Result, TrackerError};
