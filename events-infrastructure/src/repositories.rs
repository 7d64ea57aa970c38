pub mod csv_event_source;

pub use csv_event_source::*;
