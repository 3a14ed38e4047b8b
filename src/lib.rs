pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod navigator;
pub mod server;

pub use error::MazeError;
