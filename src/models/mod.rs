pub mod calendar;
pub mod dataset;
pub mod record;

pub use calendar::*;
pub use dataset::*;
pub use record::*;
