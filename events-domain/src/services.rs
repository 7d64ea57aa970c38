// Domain services
pub mod aggregator;
pub mod candidate_filter;
pub mod response_shaper;

pub use aggregator::*;
pub use candidate_filter::*;
pub use response_shaper::*;
