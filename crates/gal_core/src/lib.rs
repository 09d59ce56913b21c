pub mod algorithm;
pub mod approximate;
pub mod benchmark;
pub mod comparator;
pub mod distance_matrix;
pub mod error;
pub mod exact;
pub mod matrix_io;
pub mod stopwatch;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
