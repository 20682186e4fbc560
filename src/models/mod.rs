pub mod config;
pub mod packet;
pub mod report;
