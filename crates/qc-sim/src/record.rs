//! Per-cycle reading record.

use serde::{Deserialize, Serialize};

/// Lower bound of the uniform draw per channel.
pub const SIGNAL_MIN: f64 = 100.0;
/// Upper bound of the uniform draw per channel.
pub const SIGNAL_MAX: f64 = 500.0;

/// One reading per simulated cycle. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CycleRecord {
    /// Cycle index, starting at 0.
    pub elapsed: usize,
    /// Three-channel Cy5 averages.
    pub cy5_avg_values: [f64; 3],
    /// Three-channel FAM averages.
    pub fam_avg_values: [f64; 3],
    /// Single-channel HEX reading.
    pub hex_value: f64,
}
