//! Read entities definitions.

pub mod employee;
pub mod salary;
