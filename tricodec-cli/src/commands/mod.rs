//! Command implementations for the tricodec CLI.

pub mod compress;
pub mod decompress;
pub mod inspect;

pub use compress::{CompressOptions, cmd_compress};
pub use decompress::cmd_decompress;
pub use inspect::cmd_inspect;
