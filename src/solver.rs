//! ## Example
//!
//! ```
//! use fdpwn::solver::{compute_argument, std_stream, StdStream};
//!
//! // Land the target's `atoi(argv[1]) - 0x1234` on stdin.
//! let arg = compute_argument(0x1234, 0);
//! assert_eq!(arg, 4660);
//! assert_eq!(std_stream(arg - 0x1234), Some(StdStream::Stdin));
//! ```

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

/// The three well-known descriptors a redirection challenge usually aims for.
#[derive(FromPrimitive, ToPrimitive, PartialEq, Debug)]
pub enum StdStream {
    Stdin = 0,
    Stdout = 1,
    Stderr = 2,
}

/// Map a descriptor number onto a standard stream, if it is one.
pub fn std_stream(target: i64) -> Option<StdStream> {
    StdStream::from_i64(target)
}

/// The argument to hand the target so that subtracting `bias` yields `target`.
///
/// Plain arithmetic: `compute_argument(bias, target) - bias == target`.
pub fn compute_argument(bias: u64, target: i64) -> i64 {
    bias as i64 + target
}

/// The descriptor the target derives from a supplied argument.
///
/// Inverse of [`compute_argument`]; what `fd = atoi(argv[1]) - BIAS` computes.
pub fn target_descriptor(bias: u64, argument: i64) -> i64 {
    argument - bias as i64
}

/// Whether a resource at `position` of `size` total bytes must be rewound
/// before the next read can observe data.
///
/// At or past the end, a read returns zero bytes with no error. That is
/// end-of-resource, not a failure. When the descriptor is shared with another
/// process, re-check this immediately before each read instead of caching an
/// earlier answer; the other side moves the position too.
pub fn needs_reposition(position: u64, size: u64) -> bool {
    position >= size
}

/// Byte-for-byte comparison of a read against the expected content.
///
/// Length included; no trimming, no case folding.
pub fn verify_read(bytes_read: &[u8], expected: &[u8]) -> bool {
    bytes_read == expected
}
