mod draft;
mod menu;
mod record;
mod status;

pub use draft::*;
pub use menu::*;
pub use record::*;
pub use status::*;

#[cfg(test)]
pub(crate) use record::fixtures;
