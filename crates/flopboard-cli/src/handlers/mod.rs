pub mod dashboard;
pub mod intervals;
pub mod winners;
