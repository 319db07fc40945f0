//! Core traits implemented by every codec.
//!
//! A codec turns a byte sequence into [`PackedBits`] plus an explicit model.
//! The model is everything the symmetric decoder needs besides the packed
//! bytes, so it is a first-class serialisable value rather than hidden
//! encoder state.

use crate::bitstream::PackedBits;
use crate::error::Result;
use crate::report::EncodeResult;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Instant;

/// Output of a single encode call.
#[derive(Debug, Clone)]
pub struct Encoded<M> {
    /// Packed, zero padded bit stream.
    pub packed: PackedBits,
    /// Model required to decode `packed`.
    pub model: M,
}

/// Human-readable diagnostic rendering of a codec model.
pub trait Diagnostic {
    /// Render the info artifact text.
    fn render(&self) -> String;
}

/// A whole-buffer compressor with a symmetric decoder.
pub trait Codec: Send + Sync {
    /// Model produced by the encoder and consumed by the decoder.
    type Model: Diagnostic + Serialize + DeserializeOwned + Send;

    /// Short lowercase name used for reports and artifact file names.
    fn name(&self) -> &'static str;

    /// Compress `input`.
    fn encode(&self, input: &[u8]) -> Result<Encoded<Self::Model>>;

    /// Reconstruct the original bytes from `packed` and its model.
    fn decode(&self, packed: &[u8], model: &Self::Model) -> Result<Vec<u8>>;

    /// Compress `input` and measure the elapsed wall-clock time.
    fn compress_timed(&self, input: &[u8]) -> Result<(Encoded<Self::Model>, EncodeResult)> {
        let start = Instant::now();
        let encoded = self.encode(input)?;
        let elapsed = start.elapsed();

        let result = EncodeResult::new(self.name(), input.len(), encoded.packed.len(), elapsed);
        Ok((encoded, result))
    }

    /// Encode then decode, returning true if the input was reproduced.
    fn verify(&self, input: &[u8]) -> Result<bool> {
        let encoded = self.encode(input)?;
        let decoded = self.decode(encoded.packed.bytes(), &encoded.model)?;
        Ok(decoded == input)
    }
}
