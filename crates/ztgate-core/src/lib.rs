pub mod config;
pub mod logging;

pub mod audit;
pub mod features;
pub mod inspect;
pub mod policy;
pub mod scoring;
