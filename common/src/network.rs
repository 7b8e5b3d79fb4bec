//! Target enumeration: hosts from ranges, ports from specs, and the static
//! service table used to label open ports.

pub mod ports;
pub mod range;
pub mod services;
pub mod target;
