/// Token amount, matching the SEP-41 token interface.
pub type Amount = i128;
