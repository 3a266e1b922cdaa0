pub mod errors;
pub mod counter;
pub mod edges;
pub mod binning;
pub mod efficiency;

pub use self::counter::Counter;
pub use self::edges::BinEdges;
pub use self::errors::*;
