//! DNS Librarian Application Layer
//!
//! Ports describe the capabilities the core consumes (interface inventory,
//! liveness probing, DNS client); use cases implement resolver discovery and
//! the failover domain query on top of them.
pub mod ports;
pub mod use_cases;
