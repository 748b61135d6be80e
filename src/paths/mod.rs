//! Path normalization and source-to-destination mapping

mod map;
mod normalize;

pub use map::PathMapper;
pub use normalize::PathNormalizer;
