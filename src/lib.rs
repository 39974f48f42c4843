//! Solver kit for file-descriptor redirection CTF challenges.
//!
//! The canonical target computes `fd = atoi(argv[1]) - BIAS`, reads from that
//! descriptor, and compares what it read against a fixed string.

/// Give you an easy interaction with an executable launched as a child process.
pub mod connection;

/// Track a descriptor's read position and decide when it must be rewound.
pub mod descriptor;

/// Crate-wide error type.
pub mod error;

/// Offset arithmetic and read verification.
pub mod solver;

pub mod util;
