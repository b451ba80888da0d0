pub mod candidates;
pub mod config;
pub mod error;
pub mod normalize;
pub mod quality;
pub mod roles;
pub mod storage;
pub mod telemetry;
