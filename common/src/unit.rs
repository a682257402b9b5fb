//! Marker types.

/// Marker type describing an employee hiring.
#[derive(Clone, Copy, Debug)]
pub struct Hiring;

/// Marker type describing an employee termination.
#[derive(Clone, Copy, Debug)]
pub struct Termination;

