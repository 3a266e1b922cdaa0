pub mod shared;

pub use self::shared::SharedAccumulator;
