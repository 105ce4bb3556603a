use crate::types::Amount;

/// Smallest share a contributor can be registered with (percent)
pub const MIN_SHARE: u32 = 1;

/// Ceiling for the sum of all registered shares (percent)
pub const MAX_TOTAL_SHARES: u32 = 100;

/// Divisor turning a percentage share into a fraction of deposits
pub const SHARE_DENOMINATOR: Amount = 100;

/// Upper bound on lifetime deposits. Keeps `total_received * share` inside
/// `i128` for every share up to `MAX_TOTAL_SHARES`.
pub const MAX_TOTAL_RECEIVED: Amount = Amount::MAX / SHARE_DENOMINATOR;

/// Maximum number of contributors accepted by a single batch registration
pub const MAX_BATCH_SIZE: u32 = 20;
