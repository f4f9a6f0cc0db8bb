//! SystemVerilog generation for the SEC-DED encoder.
//!
//! Templates a [`SecDedCode`]'s width and check-bit count into a
//! parameterized combinational module that mirrors the library encoder
//! bit-for-bit: the ascending position walk with power-of-two parity
//! placeholders, the parity-group XOR loops, and the final
//! reverse-plus-overall-parity stage. The emitted text is handed to an
//! external synthesis toolchain; nothing here parses or validates what
//! that toolchain produces.
//!
//! # Examples
//!
//! ```rust
//! use secded::{verilog, SecDedCode};
//!
//! let code = SecDedCode::new(8).unwrap();
//! verilog::generate(&code, std::io::stdout()).unwrap();
//! ```

use std::io::{self, Write};

use crate::ecc::SecDedCode;

/// Writes the SEC-DED encoder module for `code` to `w`.
///
/// The module takes a `WIDTH`-bit message and produces the
/// `NUM_BITS_PARITY`-bit output word, most significant bit first: codeword
/// position `n` down to position 1, then the overall parity bit.
pub fn generate<W: Write>(code: &SecDedCode, mut w: W) -> io::Result<()> {
    writeln!(w, "module secded_encoder")?;
    writeln!(w, "  #(")?;
    writeln!(w, "    parameter int WIDTH = {},", code.data_bits())?;
    writeln!(w, "    parameter int CHECK_BITS = {},", code.check_bits())?;
    writeln!(w, "    parameter int NUM_BITS = CHECK_BITS + WIDTH,")?;
    writeln!(w, "    parameter int NUM_BITS_PARITY = NUM_BITS + 1")?;
    writeln!(w, "  )")?;
    writeln!(w, "  (")?;
    writeln!(w, "    input  logic [WIDTH-1:0] in_bits,")?;
    writeln!(w, "    output logic [NUM_BITS_PARITY-1:0] out_word")?;
    writeln!(w, "  );")?;
    writeln!(w)?;
    writeln!(w, "  // Codeword before the overall parity bit; out_bits[i-1]")?;
    writeln!(w, "  // is 1-based position i.")?;
    writeln!(w, "  logic [NUM_BITS-1:0] out_bits;")?;
    writeln!(w, "  logic [NUM_BITS_PARITY-1:0] r_out_bits;")?;
    writeln!(w, "  integer input_idx;")?;
    writeln!(w, "  integer idx_bit;")?;
    writeln!(w, "  integer xor_val;")?;
    writeln!(w)?;
    writeln!(w, "  always_comb begin")?;
    writeln!(
        w,
        "      // Walk positions 1..NUM_BITS: powers of two hold parity"
    )?;
    writeln!(
        w,
        "      // placeholders, the rest take message bits MSB-first."
    )?;
    writeln!(w, "      input_idx = WIDTH - 1;")?;
    writeln!(w, "      out_bits = '0;")?;
    writeln!(
        w,
        "      for (integer i = 1; i <= NUM_BITS; i = i + 1) begin"
    )?;
    writeln!(w, "          if ((i & (i - 1)) == 0)")?;
    writeln!(w, "              out_bits[i-1] = 0;")?;
    writeln!(w, "          else if (input_idx >= 0) begin")?;
    writeln!(w, "              out_bits[i-1] = in_bits[input_idx];")?;
    writeln!(w, "              input_idx--;")?;
    writeln!(w, "          end")?;
    writeln!(w, "      end")?;
    writeln!(w)?;
    writeln!(w, "      // Fill each parity position from its group's XOR.")?;
    writeln!(w, "      for (integer i = 0; i < CHECK_BITS; i++) begin")?;
    writeln!(w, "        idx_bit = 1 << i;")?;
    writeln!(w, "        xor_val = 0;")?;
    writeln!(w, "        for (int j = 1; j <= NUM_BITS; j++) begin")?;
    writeln!(
        w,
        "          if ((j & idx_bit) && (j != idx_bit - 1)) begin"
    )?;
    writeln!(w, "                xor_val ^= out_bits[j-1];")?;
    writeln!(w, "          end")?;
    writeln!(w, "        end")?;
    writeln!(w, "        out_bits[idx_bit - 1] = xor_val;")?;
    writeln!(w, "      end")?;
    writeln!(w)?;
    writeln!(
        w,
        "      // Reverse to position-NUM_BITS-first order and append the"
    )?;
    writeln!(
        w,
        "      // overall parity bit as the least significant output bit."
    )?;
    writeln!(w, "      xor_val = 0;")?;
    writeln!(w, "      for (int i = 0; i < NUM_BITS; i++) begin")?;
    writeln!(w, "          xor_val ^= out_bits[i];")?;
    writeln!(w, "          r_out_bits[i + 1] = out_bits[i];")?;
    writeln!(w, "      end")?;
    writeln!(w, "      r_out_bits[0] = xor_val;")?;
    writeln!(w)?;
    writeln!(w, "  end")?;
    writeln!(w, "  assign out_word = r_out_bits;")?;
    writeln!(w)?;
    writeln!(w, "endmodule")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(data_bits: usize) -> String {
        let code = SecDedCode::new(data_bits).unwrap();
        let mut buf = Vec::new();
        generate(&code, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_parameters_match_layout() {
        let text = render(8);
        assert!(text.contains("parameter int WIDTH = 8,"));
        assert!(text.contains("parameter int CHECK_BITS = 4,"));

        let text = render(1);
        assert!(text.contains("parameter int WIDTH = 1,"));
        assert!(text.contains("parameter int CHECK_BITS = 2,"));
    }

    #[test]
    fn test_module_structure() {
        let text = render(4);
        assert!(text.starts_with("module secded_encoder"));
        assert!(text.trim_end().ends_with("endmodule"));
        assert!(text.contains("always_comb begin"));
        assert!(text.contains("output logic [NUM_BITS_PARITY-1:0] out_word"));
        // Parity-group membership test, kept verbatim from the layout.
        assert!(text.contains("(j & idx_bit) && (j != idx_bit - 1)"));
        // Power-of-two parity position detection.
        assert!(text.contains("(i & (i - 1)) == 0"));
    }

    #[test]
    fn test_output_is_reversed_with_trailing_parity() {
        let text = render(4);
        assert!(text.contains("r_out_bits[i + 1] = out_bits[i];"));
        assert!(text.contains("r_out_bits[0] = xor_val;"));
    }
}
