use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::truth::{Result, TruthValue};

/// Low-word payload hosts in the R tradition use to mark a missing double.
pub const DEFAULT_MISSING_PAYLOAD: u32 = 1954;

/// Exponent bits of an IEEE-754 double set to all ones; with a non-zero
/// mantissa the pattern is a NaN.
const NAN_EXPONENT: u64 = 0x7FF0_0000_0000_0000;

const DEFAULT_PAYLOAD: NonZeroU32 = match NonZeroU32::new(DEFAULT_MISSING_PAYLOAD) {
    Some(p) => p,
    None => panic!("missing payload must be non-zero"),
};

/// How a host marks "missing" inside an f64 stream.
///
/// A missing value is a NaN whose low 32 bits equal `payload`. Any other NaN
/// is an error, not a missing value. Only the low word is compared on decode
/// so that a sentinel whose quiet bit was set by host arithmetic still reads
/// as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingEncoding {
    payload: NonZeroU32,
}

impl Default for MissingEncoding {
    fn default() -> Self {
        Self::new(DEFAULT_PAYLOAD)
    }
}

impl MissingEncoding {
    /// A zero payload would collide with infinity, hence `NonZeroU32`.
    pub fn new(payload: NonZeroU32) -> Self {
        Self { payload }
    }

    pub fn payload(&self) -> u32 {
        self.payload.get()
    }

    /// Canonical bit pattern written for a missing value
    pub fn sentinel(&self) -> f64 {
        f64::from_bits(NAN_EXPONENT | u64::from(self.payload.get()))
    }

    pub fn is_missing(&self, x: f64) -> bool {
        x.is_nan() && (x.to_bits() as u32) == self.payload.get()
    }

    /// Sentinel → `Missing`; any other value goes through the validator.
    pub fn decode(&self, x: f64) -> Result<TruthValue> {
        if self.is_missing(x) {
            return Ok(TruthValue::Missing);
        }
        TruthValue::new(x)
    }

    /// Decodes a whole host vector; aborts on the first invalid element.
    pub fn decode_slice(&self, xs: &[f64]) -> Result<Vec<TruthValue>> {
        xs.iter()
            .enumerate()
            .map(|(i, &x)| {
                self.decode(x).inspect_err(|e| {
                    tracing::debug!(index = i, error = %e, "rejected host value");
                })
            })
            .collect()
    }

    pub fn encode(&self, t: TruthValue) -> f64 {
        match t {
            TruthValue::Value(v) => v,
            TruthValue::Missing => self.sentinel(),
        }
    }

    pub fn encode_slice(&self, ts: &[TruthValue]) -> Vec<f64> {
        ts.iter().map(|&t| self.encode(t)).collect()
    }
}
