pub mod algorithm;
pub mod errors;
pub mod params;
pub mod recurrence;
pub mod termination;
