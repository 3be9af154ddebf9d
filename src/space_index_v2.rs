/*!
 * Generate the raw sequence from the element index.
 * Version 2: Each raw value is computed as `low + i * step`, so rounding
 * error stays per-element instead of accumulating along the sequence.
 */

use anyhow::Result;

use crate::Value;

/// Tolerance used by the optional endpoint check.
#[cfg(feature = "range_check")]
const ENDPOINT_TOL: Value = 1e-9;

/// Represents the configured range the sequence is drawn from.
pub struct Range {
    low: Value,
    step: Value,
    num: usize,
    results: Vec<i64>,

    #[cfg(feature = "range_check")]
    high: Value,
}

impl Range {
    /// Create Range object.
    /// `num` equal to 1 is allowed and produces the single value `low`;
    /// the step stays at 0.0 in that case and is never observed.
    #[allow(dead_code)]
    pub fn create(low: Value, high: Value, num: usize) -> Result<Self> {
        if num < 1 {
            bail!("Number of values must be at least 1, got: {}", num);
        }
        let step = if num > 1 { (high - low) / (num - 1) as Value } else { 0.0 };
        Ok(Range {
            low,
            step,
            num,
            results: Vec::with_capacity(num),

            #[cfg(feature = "range_check")]
            high,
        })
    }
}

impl crate::Spacer for Range {
    /// Computes every raw value independently from its index.
    fn generate(&mut self, transform: impl Fn(Value) -> Value) -> Result<&[i64]> {
        self.results.clear();
        for i in 0..self.num {
            let raw = self.low + i as Value * self.step;
            self.results.push(transform(raw).trunc() as i64);
        }

        #[cfg(feature = "range_check")] {
            let last = self.low + (self.num - 1) as Value * self.step;
            if self.num > 1 && (last - self.high).abs() > ENDPOINT_TOL {
                bail!("Endpoint check failed: last raw value ({}) != high ({})", last, self.high);
            }
        }

        Ok(&self.results[..])
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests
///

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::*;

    include!("test_common_i64.inc.rs");
}
