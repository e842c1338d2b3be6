pub mod config;
pub mod error;
pub mod types;

pub use error::{CascError, CascResult};
pub use types::{FrameIndex, KeyName};
