//! Token accounting and pricing

use serde::{Deserialize, Serialize};

/// Token counts reported for one generation attempt (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
}

impl TokenUsage {
    /// Usage whose total is the sum of input and output
    pub fn new(input_tokens: u64, output_tokens: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
        }
    }

    /// Usage with a total reported by the model service.
    ///
    /// The service's total is authoritative when present (it may include
    /// tokens such as cached or reasoning tokens that input + output omit).
    pub fn with_reported_total(input_tokens: u64, output_tokens: u64, total: Option<u64>) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: total.unwrap_or(input_tokens + output_tokens),
        }
    }
}

/// Fixed per-1K-token rates used to price a generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    /// Price per 1000 input (prompt) tokens
    pub input_per_1k: f64,
    /// Price per 1000 output (candidate) tokens
    pub output_per_1k: f64,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            input_per_1k: 0.00025,
            output_per_1k: 0.00125,
        }
    }
}

impl Pricing {
    pub fn new(input_per_1k: f64, output_per_1k: f64) -> Self {
        Self {
            input_per_1k,
            output_per_1k,
        }
    }

    /// Monetary cost of one generation
    pub fn cost(&self, usage: &TokenUsage) -> f64 {
        (usage.input_tokens as f64 / 1000.0) * self.input_per_1k
            + (usage.output_tokens as f64 / 1000.0) * self.output_per_1k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_by_default() {
        let usage = TokenUsage::new(120, 80);
        assert_eq!(usage.total_tokens, 200);
    }

    #[test]
    fn test_reported_total_is_authoritative() {
        let usage = TokenUsage::with_reported_total(120, 80, Some(260));
        assert_eq!(usage.total_tokens, 260);
        let usage = TokenUsage::with_reported_total(120, 80, None);
        assert_eq!(usage.total_tokens, 200);
    }

    #[test]
    fn test_default_pricing_cost() {
        let cost = Pricing::default().cost(&TokenUsage::new(1000, 1000));
        assert!((cost - 0.0015).abs() < 1e-12);
    }

    #[test]
    fn test_zero_usage_is_free() {
        assert_eq!(Pricing::default().cost(&TokenUsage::default()), 0.0);
    }
}
