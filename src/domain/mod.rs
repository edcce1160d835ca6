//! Domain types for the person store.

pub mod person;

pub use person::Person;
