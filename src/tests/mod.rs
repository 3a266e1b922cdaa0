#[macro_use]
pub mod util;
mod histogram;
mod histogram_2d;
mod serialization;
