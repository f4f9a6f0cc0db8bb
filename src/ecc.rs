//! Error correction code implementations.
//!
//! This module covers exactly one code family: the extended Hamming code
//! with an overall parity bit, better known as SEC-DED (single error
//! correction, double error detection). It computes the bit layout of the
//! encoder — how many check bits a message width needs, where every
//! message and parity bit lands in the codeword, and which positions each
//! parity group XORs over — and encodes messages with that layout.
//!
//! # Examples
//!
//! ```rust
//! use bitvec::prelude::*;
//! use secded::ecc::secded::SecDedCode;
//!
//! let code = SecDedCode::new(4).unwrap();
//! assert_eq!(code.check_bits(), 3);
//!
//! let message = bitvec![u8, Msb0; 1, 0, 1, 1];
//! let word = code.encode(&message).unwrap();
//! assert_eq!(word.len(), code.extended_length());
//! ```

use crate::error::Error;

/// Result type for error correction operations
pub type Result<T> = std::result::Result<T, Error>;

/// SEC-DED (extended Hamming) encoder layout
pub mod secded;
pub use secded::{check_bits, parse_width, SecDedCode};
