
/// Illegal instruction and overflow handling.
pub mod exceptions;


/// Forwarding and hazard stalls.
pub mod hazards;
