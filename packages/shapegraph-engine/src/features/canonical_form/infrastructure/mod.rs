//! Canonical Form Infrastructure

pub mod builder;

pub use builder::CanonicalFormBuilder;
