pub(crate) mod intervals;
pub(crate) mod winners;
