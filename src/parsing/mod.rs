//! Element tree and the extractors that turn filing elements into records.
pub mod classify;
pub mod context;
pub mod fact;
pub mod unit;
pub mod utils;
pub mod xml;
