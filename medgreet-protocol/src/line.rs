//! Line framing for the serial name channel.
//!
//! Bytes are fed one at a time; a complete line is produced on `\n`.
//! Lines that exceed [`MAX_LINE_LEN`] are dropped up to the next newline
//! and reported once.

use heapless::Vec;

/// Line terminator
pub const LINE_END: u8 = b'\n';

/// Maximum number of bytes buffered for a single line (terminator excluded)
pub const MAX_LINE_LEN: usize = 128;

/// Errors that can occur while assembling a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded `MAX_LINE_LEN`; the rest of it is being discarded
    Overflow,
    /// Line completed but is not valid UTF-8
    InvalidUtf8,
}

/// A complete received line, terminator stripped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8, MAX_LINE_LEN>,
}

impl Line {
    /// Line content as text
    pub fn as_str(&self) -> &str {
        // Validated when the line was completed
        core::str::from_utf8(&self.bytes).unwrap_or("")
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the line carried no bytes
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssembleState {
    /// Buffering bytes of the current line
    Collecting,
    /// Current line overflowed, waiting for its terminator
    Discarding,
}

/// State machine turning a byte stream into lines
#[derive(Debug, Clone)]
pub struct LineAssembler {
    state: AssembleState,
    buffer: Vec<u8, MAX_LINE_LEN>,
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl LineAssembler {
    /// Create a new line assembler
    pub const fn new() -> Self {
        Self {
            state: AssembleState::Collecting,
            buffer: Vec::new(),
        }
    }

    /// Drop any partially received line
    pub fn reset(&mut self) {
        self.state = AssembleState::Collecting;
        self.buffer.clear();
    }

    /// Number of bytes buffered for the line in progress
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` when `byte` completes a line, `Ok(None)` when
    /// more bytes are needed, or `Err` on overflow (reported once per line)
    /// and on invalid UTF-8.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, LineError> {
        match self.state {
            AssembleState::Collecting => {
                if byte == LINE_END {
                    let bytes = core::mem::take(&mut self.buffer);
                    if core::str::from_utf8(&bytes).is_err() {
                        return Err(LineError::InvalidUtf8);
                    }
                    return Ok(Some(Line { bytes }));
                }

                if self.buffer.push(byte).is_err() {
                    self.buffer.clear();
                    self.state = AssembleState::Discarding;
                    return Err(LineError::Overflow);
                }
                Ok(None)
            }
            AssembleState::Discarding => {
                if byte == LINE_END {
                    self.state = AssembleState::Collecting;
                }
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(assembler: &mut LineAssembler, bytes: &[u8]) -> Option<Result<Line, LineError>> {
        for &byte in bytes {
            match assembler.feed(byte) {
                Ok(Some(line)) => return Some(Ok(line)),
                Ok(None) => {}
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }

    #[test]
    fn test_single_line() {
        let mut assembler = LineAssembler::new();
        let line = feed_all(&mut assembler, b"NAME:Ada\n").unwrap().unwrap();
        assert_eq!(line.as_str(), "NAME:Ada");
        assert_eq!(assembler.pending(), 0);
    }

    #[test]
    fn test_partial_line_waits() {
        let mut assembler = LineAssembler::new();
        assert!(feed_all(&mut assembler, b"Be").is_none());
        assert_eq!(assembler.pending(), 2);

        let line = feed_all(&mut assembler, b"n\n").unwrap().unwrap();
        assert_eq!(line.as_str(), "Ben");
    }

    #[test]
    fn test_crlf_keeps_carriage_return() {
        // Trimming happens in the command parser, not here
        let mut assembler = LineAssembler::new();
        let line = feed_all(&mut assembler, b"Ada\r\n").unwrap().unwrap();
        assert_eq!(line.as_str(), "Ada\r");
    }

    #[test]
    fn test_empty_line() {
        let mut assembler = LineAssembler::new();
        let line = feed_all(&mut assembler, b"\n").unwrap().unwrap();
        assert!(line.is_empty());
    }

    #[test]
    fn test_overflow_reported_once_then_resyncs() {
        let mut assembler = LineAssembler::new();
        let mut errors = 0;

        for _ in 0..MAX_LINE_LEN + 40 {
            if assembler.feed(b'x') == Err(LineError::Overflow) {
                errors += 1;
            }
        }
        assert_eq!(errors, 1);

        // Terminator of the oversized line yields nothing
        assert_eq!(assembler.feed(LINE_END), Ok(None));

        let line = feed_all(&mut assembler, b"Ben\n").unwrap().unwrap();
        assert_eq!(line.as_str(), "Ben");
    }

    #[test]
    fn test_line_at_capacity_is_accepted() {
        let mut assembler = LineAssembler::new();
        for _ in 0..MAX_LINE_LEN {
            assert_eq!(assembler.feed(b'a'), Ok(None));
        }
        let line = assembler.feed(LINE_END).unwrap().unwrap();
        assert_eq!(line.len(), MAX_LINE_LEN);
    }

    #[test]
    fn test_invalid_utf8() {
        let mut assembler = LineAssembler::new();
        let result = feed_all(&mut assembler, &[0xFF, 0xFE, LINE_END]);
        assert_eq!(result, Some(Err(LineError::InvalidUtf8)));

        // Next line is unaffected
        let line = feed_all(&mut assembler, b"Ada\n").unwrap().unwrap();
        assert_eq!(line.as_str(), "Ada");
    }

    #[test]
    fn test_reset_drops_partial_line() {
        let mut assembler = LineAssembler::new();
        feed_all(&mut assembler, b"garbage");
        assembler.reset();
        let line = feed_all(&mut assembler, b"Ada\n").unwrap().unwrap();
        assert_eq!(line.as_str(), "Ada");
    }
}
