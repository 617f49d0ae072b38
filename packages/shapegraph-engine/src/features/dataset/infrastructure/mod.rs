//! Dataset Infrastructure

pub mod ntriples;

pub use ntriples::NTriplesReader;
