pub mod browser;
pub mod state;
pub mod style;
pub mod timer;
pub mod transport;
