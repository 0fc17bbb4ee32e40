// Library target shared by the binary, integration tests and criterion
// benches. Terminal I/O (event pump, app loop) lives in the binary only.

pub mod config;
pub mod engine;
pub mod generator;
pub mod session;
pub mod ui;
