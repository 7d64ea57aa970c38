// Domain value objects
pub mod enrichment;

pub use enrichment::*;
