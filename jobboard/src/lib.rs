pub mod dates;
pub mod domain;
mod import;
mod navigation;
mod stats;
mod storage;
mod store;
mod template;

pub use import::*;
pub use navigation::*;
pub use stats::*;
pub use storage::*;
pub use store::*;
pub use template::*;
