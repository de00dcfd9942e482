// Library surface for the binary and for headless/integration tests.
pub mod app;
pub mod app_dirs;
pub mod clock;
pub mod config;
pub mod focus;
pub mod input;
pub mod logging;
pub mod pager;
pub mod runtime;
pub mod store;
pub mod time_source;
pub mod ui;
