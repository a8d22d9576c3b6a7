//! Embedded region table
//!
//! Region rows compiled into the binary at build time.

// Include generated region table from build script
include!(concat!(env!("OUT_DIR"), "/regions.rs"));
