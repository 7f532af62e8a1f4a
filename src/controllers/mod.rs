pub mod ports;
pub mod session;
