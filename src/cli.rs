//! The line-oriented shell around the kernels: read one line, transform it,
//! write the result.
//!
//! It is kept in the library, generic over its reader and writer, so the
//! binary stays a thin wrapper and the shell can be tested without a process.

use std::io::{BufRead, Write};

use crate::config::{CodecConfig, Mode};
use crate::error::Base32kError;
use crate::kernels;

/// Reads the first line of `input` (without its `\n` or `\r\n`), transforms it
/// according to `config.mode` and writes the result to `output`.
///
/// No line at all is `EmptyInput`; an empty line is valid and yields empty output.
pub fn run<R: BufRead, W: Write>(
    config: &CodecConfig,
    mut input: R,
    mut output: W,
) -> Result<(), Base32kError> {
    log::debug!("resolved config: {}", serde_json::to_string(config)?);

    let line = read_line(&mut input)?;
    let result = match config.mode {
        Mode::Encode => kernels::encode(&line),
        Mode::Decode => kernels::decode(&line)?,
    };
    log::debug!(
        "{:?}: {} bytes in, {} bytes out",
        config.mode,
        line.len(),
        result.len()
    );

    output.write_all(&result)?;
    if config.append_newline {
        output.write_all(b"\n")?;
    }
    output.flush()?;
    Ok(())
}

/// Reads raw bytes up to the first newline. Encode input need not be UTF-8.
fn read_line<R: BufRead>(input: &mut R) -> Result<Vec<u8>, Base32kError> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Err(Base32kError::EmptyInput);
    }
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_to_vec(config: &CodecConfig, input: &[u8]) -> Result<Vec<u8>, Base32kError> {
        let mut output = Vec::new();
        run(config, Cursor::new(input), &mut output)?;
        Ok(output)
    }

    #[test]
    fn test_encode_line() {
        let output = run_to_vec(&CodecConfig::default(), b"\x00\n").unwrap();
        assert_eq!(output, "耀i\n".as_bytes());
    }

    #[test]
    fn test_decode_line_with_crlf() {
        let config = CodecConfig::for_mode(Mode::Decode);
        let output = run_to_vec(&config, "耀i\r\n".as_bytes()).unwrap();
        assert_eq!(output, b"\x00\n");
    }

    #[test]
    fn test_only_first_line_is_read() {
        let output = run_to_vec(&CodecConfig::default(), b"\x00\nignored\n").unwrap();
        assert_eq!(output, "耀i\n".as_bytes());
    }

    #[test]
    fn test_line_without_newline_at_eof() {
        let config = CodecConfig {
            append_newline: false,
            ..CodecConfig::for_mode(Mode::Decode)
        };
        let output = run_to_vec(&config, "缀老b".as_bytes()).unwrap();
        assert_eq!(output, vec![0x00, 0xff]);
    }

    #[test]
    fn test_empty_line_round_trips_to_empty_output() {
        let output = run_to_vec(&CodecConfig::default(), b"\n").unwrap();
        assert_eq!(output, b"\n");
    }

    #[test]
    fn test_no_input_is_an_error() {
        let err = run_to_vec(&CodecConfig::default(), b"").unwrap_err();
        assert!(matches!(err, Base32kError::EmptyInput));
    }

    #[test]
    fn test_decode_error_writes_nothing() {
        let config = CodecConfig::for_mode(Mode::Decode);
        let mut output = Vec::new();
        let err = run(&config, Cursor::new("耀\u{a000}\n".as_bytes()), &mut output).unwrap_err();
        assert!(matches!(err, Base32kError::InvalidLane { position: 1, .. }));
        assert!(output.is_empty());
    }
}
