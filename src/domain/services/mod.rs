pub mod classifier;
pub mod combiner;
pub mod formula;
pub mod matcher;
pub mod merger;
pub mod normalize;
pub mod ranking;

pub use classifier::{classify, global_classify, DEFAULT_SNAKE_GROUPS};
pub use merger::calculate_strip_classifications;
