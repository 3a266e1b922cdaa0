pub mod counts;
pub mod histogram;
pub mod joint_histogram;
pub mod efficiency_histogram;
pub mod histogram_2d;
pub mod efficiency_histogram_2d;

pub use self::counts::CountsBuffer;
pub use self::efficiency_histogram::{EffHistogram, EfficiencyView};
pub use self::efficiency_histogram_2d::{EffHistogram2D, Points};
pub use self::histogram::Histogram;
pub use self::histogram_2d::Histogram2D;
pub use self::joint_histogram::JointHistogram;
