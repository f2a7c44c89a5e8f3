pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod media;
pub mod seed;
pub mod server;
pub mod storage;
