pub mod app;
pub mod builder;
pub mod config;
pub mod inspect;
pub mod record;
pub mod sources;
pub mod util;
pub mod writer;
