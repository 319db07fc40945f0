//! LZW dictionary (code table) management.

use crate::config::LzwConfig;
use crate::error::Result;
use std::collections::HashMap;
use tricodec_core::CodecError;

/// Codes below this value are the single-byte strings.
pub const FIRST_CODE: u32 = 256;

/// One learned string: a known prefix extended by one byte.
#[derive(Debug, Clone, Copy)]
struct Entry {
    prefix: u32,
    byte: u8,
    first: u8,
    len: u32,
}

/// LZW dictionary for encoding and decoding.
///
/// Codes `0..256` are the single bytes. Each later code names a
/// `(prefix code, byte)` pair, so a string is stored in constant space and
/// spelled by walking its prefix chain. Entries are write-once.
#[derive(Debug)]
pub struct LzwDictionary {
    /// Learned entries; code `FIRST_CODE + i` lives at index `i`.
    entries: Vec<Entry>,
    /// Reverse lookup `(prefix, byte) -> code`, used by the encoder.
    reverse: HashMap<(u32, u8), u32>,
    /// Configuration.
    config: LzwConfig,
}

impl LzwDictionary {
    /// Create a dictionary holding only the 256 single-byte strings.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            entries: Vec::new(),
            reverse: HashMap::new(),
            config,
        })
    }

    /// Code that the next learned string will receive.
    pub fn next_code(&self) -> u32 {
        FIRST_CODE + self.entries.len() as u32
    }

    /// Whether the code space is exhausted. A frozen dictionary keeps
    /// serving lookups but learns nothing new.
    pub fn is_frozen(&self) -> bool {
        self.next_code() > self.config.max_code()
    }

    /// Look up the code for `prefix` extended by `byte`.
    pub fn find(&self, prefix: u32, byte: u8) -> Option<u32> {
        self.reverse.get(&(prefix, byte)).copied()
    }

    /// Learn `prefix + byte` for encoding.
    pub fn insert(&mut self, prefix: u32, byte: u8) -> Result<u32> {
        let code = self.push(prefix, byte)?;
        self.reverse.insert((prefix, byte), code);
        Ok(code)
    }

    /// Learn `prefix + byte` for decoding; no reverse entry is kept.
    pub fn push(&mut self, prefix: u32, byte: u8) -> Result<u32> {
        let code = self.next_code();
        if code > self.config.max_code() {
            return Err(CodecError::DictionaryOverflow {
                next_code: code,
                max_code: self.config.max_code(),
            });
        }
        let (first, len) = match self.entry(prefix)? {
            Some(parent) => (parent.first, parent.len + 1),
            None => (prefix as u8, 2),
        };
        self.entries.push(Entry {
            prefix,
            byte,
            first,
            len,
        });
        Ok(code)
    }

    /// Whether `code` is currently assigned.
    pub fn contains(&self, code: u32) -> bool {
        code < self.next_code()
    }

    /// First byte of the string for `code`.
    pub fn first_byte(&self, code: u32) -> Result<u8> {
        Ok(match self.entry(code)? {
            Some(entry) => entry.first,
            None => code as u8,
        })
    }

    /// Append the string for `code` to `out`.
    pub fn write_string(&self, code: u32, out: &mut Vec<u8>) -> Result<()> {
        let Some(entry) = self.entry(code)? else {
            out.push(code as u8);
            return Ok(());
        };

        let start = out.len();
        out.resize(start + entry.len as usize, 0);
        let mut cursor = out.len();
        let mut current = Some(entry);
        let mut code = code;
        while let Some(e) = current {
            cursor -= 1;
            out[cursor] = e.byte;
            code = e.prefix;
            current = self.entry(code)?;
        }
        out[cursor - 1] = code as u8;
        Ok(())
    }

    /// Number of assigned codes, single bytes included.
    pub fn len(&self) -> usize {
        FIRST_CODE as usize + self.entries.len()
    }

    /// Always false: the single-byte codes are present from the start.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get the configuration.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }

    fn entry(&self, code: u32) -> Result<Option<Entry>> {
        if code < FIRST_CODE {
            return Ok(None);
        }
        self.entries
            .get((code - FIRST_CODE) as usize)
            .copied()
            .map(Some)
            .ok_or(CodecError::InvalidCode { code, position: 0 })
    }
}
