pub mod config;
pub mod plan;
pub mod subject;
pub mod suggest;
