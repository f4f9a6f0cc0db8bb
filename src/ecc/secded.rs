//! SEC-DED (extended Hamming) encoder layout and encoding.
//!
//! A SEC-DED code protects an `m`-bit message with `r` check bits placed at
//! the power-of-two positions of an `n = m + r` bit codeword, plus one
//! overall parity bit appended after the codeword. The check bits allow a
//! decoder to correct any single-bit error, and the overall parity bit lets
//! it tell a single-bit error apart from a double-bit error.
//!
//! This module computes the layout — check-bit count, bit placement, and
//! parity-group membership — and encodes messages with it. Positions are
//! 1-based within the codeword: position `p` is a parity position iff `p`
//! is a power of two, and every other position holds a message bit. The
//! final output word is the codeword in reverse position order (position
//! `n` first) with the overall parity bit appended as the last bit.
//!
//! Decoding is out of scope; the syndrome computation only appears in the
//! tests below to validate the layout.
//!
//! # Examples
//!
//! ```rust
//! use bitvec::prelude::*;
//! use secded::ecc::secded::SecDedCode;
//!
//! // One data bit needs two check bits: 2^2 >= 1 + 2 + 1.
//! let code = SecDedCode::new(1).unwrap();
//! assert_eq!(code.check_bits(), 2);
//! assert_eq!(code.extended_length(), 4);
//!
//! let word = code.encode(&bitvec![u8, Msb0; 1]).unwrap();
//! assert_eq!(word, bitvec![u8, Msb0; 1, 1, 1, 1]);
//! ```

use crate::ecc::Result;
use crate::error::Error;
use bitvec::prelude::*;
use log::debug;

/// Computes the minimum number of check bits for `data_bits` message bits.
///
/// Returns the smallest `r` such that `2^r >= data_bits + r + 1`. The search
/// counts up from zero; it terminates because the left side grows
/// exponentially while the right side grows linearly.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `data_bits` is zero.
pub fn check_bits(data_bits: usize) -> Result<usize> {
    if data_bits == 0 {
        return Err(Error::InvalidInput(
            "Width must be a positive number of bits".to_string(),
        ));
    }

    let mut r = 0;
    while (1usize << r) < data_bits + r + 1 {
        r += 1;
    }
    Ok(r)
}

/// Parses a width entered as text into a positive bit count.
///
/// Rejects non-integer and non-positive values with
/// [`Error::InvalidInput`]; the caller is expected to re-solicit input on
/// failure rather than proceed.
pub fn parse_width(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(value) if value > 0 => Ok(value as usize),
        Ok(value) => Err(Error::InvalidInput(format!(
            "Width must be positive, got {}",
            value
        ))),
        Err(_) => Err(Error::InvalidInput(format!(
            "Width must be an integer, got {:?}",
            trimmed
        ))),
    }
}

/// Layout of a SEC-DED code for a fixed message width.
///
/// Construction derives the check-bit count from the width; the two fields
/// never change afterwards, so a value can be shared freely between
/// threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecDedCode {
    /// Number of message bits per codeword
    data_bits: usize,
    /// Number of parity bits at power-of-two positions
    check_bits: usize,
}

impl SecDedCode {
    /// Creates the SEC-DED layout for `data_bits` message bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `data_bits` is zero.
    pub fn new(data_bits: usize) -> Result<Self> {
        let check_bits = check_bits(data_bits)?;
        debug!(
            "SEC-DED layout: {} data bits, {} check bits, {}-bit output",
            data_bits,
            check_bits,
            data_bits + check_bits + 1
        );
        Ok(SecDedCode {
            data_bits,
            check_bits,
        })
    }

    /// Number of message bits per codeword
    pub fn data_bits(&self) -> usize {
        self.data_bits
    }

    /// Number of parity bits per codeword
    pub fn check_bits(&self) -> usize {
        self.check_bits
    }

    /// Codeword length `n` before the overall parity bit
    pub fn code_length(&self) -> usize {
        self.data_bits + self.check_bits
    }

    /// Output length including the overall parity bit
    pub fn extended_length(&self) -> usize {
        self.code_length() + 1
    }

    /// Whether 1-based codeword position `pos` holds a parity bit
    pub fn is_parity_position(pos: usize) -> bool {
        pos.is_power_of_two()
    }

    /// Returns the 1-based codeword positions XOR-ed into check bit `i`.
    ///
    /// Group `i` covers every position with bit `i` set in its index,
    /// except position `2^i - 1`. For `i >= 1` the excluded position never
    /// has bit `i` set, and for `i == 0` it is position zero, which does
    /// not exist, so the exclusion is kept verbatim from the layout
    /// definition without changing which bits feed each group.
    pub fn parity_group(&self, check_index: usize) -> Vec<usize> {
        let idx_bit = 1usize << check_index;
        (1..=self.code_length())
            .filter(|&j| (j & idx_bit) != 0 && j != idx_bit - 1)
            .collect()
    }

    /// Encodes a message into the extended output word.
    ///
    /// The message is consumed most-significant-bit first (`bits[0]` is the
    /// most significant). The result has [`extended_length`] bits: the
    /// codeword in reverse position order followed by the overall parity
    /// bit.
    ///
    /// Repeated calls with the same input produce the same output; the
    /// computation holds no state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `bits` is not exactly
    /// [`data_bits`] long, and [`Error::ComputationBounds`] if the layout
    /// walk and the check-bit count disagree about the number of data
    /// positions (an internal inconsistency, not expected in practice).
    ///
    /// [`extended_length`]: Self::extended_length
    /// [`data_bits`]: Self::data_bits
    pub fn encode(&self, bits: &BitSlice<u8, Msb0>) -> Result<BitVec<u8, Msb0>> {
        if bits.len() != self.data_bits {
            return Err(Error::InvalidInput(format!(
                "Expected {} message bits, got {}",
                self.data_bits,
                bits.len()
            )));
        }

        let codeword = self.place_message(bits)?;
        let codeword = self.apply_parity(codeword);
        Ok(Self::extend(&codeword))
    }

    /// Places message bits into the data positions of a fresh codeword.
    ///
    /// Walks positions `1..=n` in ascending order with a message cursor
    /// starting at the most significant bit. Parity positions keep a zero
    /// placeholder. An exhausted cursor leaves the remaining data positions
    /// at zero; with a minimal check-bit count the cursor runs out exactly
    /// at position `n`.
    fn place_message(&self, bits: &BitSlice<u8, Msb0>) -> Result<BitVec<u8, Msb0>> {
        let n = self.code_length();
        let mut codeword = bitvec![u8, Msb0; 0; n];

        let mut message = bits.iter().by_vals();
        for pos in 1..=n {
            if Self::is_parity_position(pos) {
                continue;
            }
            if let Some(bit) = message.next() {
                codeword.set(pos - 1, bit);
            }
        }

        // Message bits left over after the walk mean the data positions
        // counted by check_bits() cannot hold the whole message.
        if message.next().is_some() {
            return Err(Error::ComputationBounds(format!(
                "{} message bits do not fit the {} data positions of a {}-bit codeword",
                self.data_bits,
                n - self.check_bits,
                n
            )));
        }

        Ok(codeword)
    }

    /// Fills each parity position from its group's XOR.
    ///
    /// A parity position still holds its zero placeholder when its own
    /// group is scanned, so including it in the scan does not perturb the
    /// result.
    fn apply_parity(&self, mut codeword: BitVec<u8, Msb0>) -> BitVec<u8, Msb0> {
        let n = codeword.len();
        for i in 0..self.check_bits {
            let idx_bit = 1usize << i;
            let mut xor_val = false;
            for j in 1..=n {
                if (j & idx_bit) != 0 && j != idx_bit - 1 {
                    xor_val ^= codeword[j - 1];
                }
            }
            codeword.set(idx_bit - 1, xor_val);
        }
        codeword
    }

    /// Reverses the codeword and appends the overall parity bit.
    ///
    /// Output index `k` holds position `n - k` for `k < n`; the last bit is
    /// the XOR of all `n` codeword bits.
    fn extend(codeword: &BitSlice<u8, Msb0>) -> BitVec<u8, Msb0> {
        let n = codeword.len();
        let mut extended = BitVec::with_capacity(n + 1);
        let mut overall = false;
        for pos in (1..=n).rev() {
            let bit = codeword[pos - 1];
            overall ^= bit;
            extended.push(bit);
        }
        extended.push(overall);
        extended
    }
}
