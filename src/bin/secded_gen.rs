//! Interactive generator for the SEC-DED encoder module.
//!
//! Prompts for a message width on stdin, re-prompting until a positive
//! integer is entered, then writes the parameterized SystemVerilog encoder
//! to a file (first CLI argument, default `secded_encoder.sv`). Synthesis
//! of the emitted module is left to an external toolchain.

use std::env;
use std::fs::File;
use std::io::{self, BufRead, Write};

use log::info;
use secded::ecc::parse_width;
use secded::{verilog, SecDedCode};

fn prompt_for_code() -> io::Result<SecDedCode> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\nEnter the number of bits (for input) you would like:");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "no width entered",
                ))
            }
        };

        match parse_width(&line).and_then(SecDedCode::new) {
            Ok(code) => return Ok(code),
            Err(err) => println!("/!\\ {} /!\\", err),
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let code = prompt_for_code()?;
    info!(
        "{} data bits -> {} check bits, {}-bit output word",
        code.data_bits(),
        code.check_bits(),
        code.extended_length()
    );

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "secded_encoder.sv".to_string());
    let file = File::create(&path)?;
    verilog::generate(&code, file)?;

    println!("Encoder module saved to {}", path);
    Ok(())
}
