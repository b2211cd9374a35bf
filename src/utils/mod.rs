pub mod coerce;
pub mod id;
pub mod json_extract;
pub mod template;
