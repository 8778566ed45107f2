use anyhow::{Context, Result, bail};
use std::io::{self, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

pub struct InputReader;

impl InputReader {
    /// Reads all of standard input, verbatim.
    ///
    /// Nothing is trimmed: a trailing newline from the shell is part of the
    /// text and travels to the translation endpoint as-is.
    #[allow(clippy::significant_drop_tightening)]
    pub fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                     Consider splitting the input into smaller parts.",
                    buffer.len() as f64 / 1024.0 / 1024.0
                );
            }
        }

        Self::into_text(buffer)
    }

    fn into_text(buffer: Vec<u8>) -> Result<String> {
        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}
