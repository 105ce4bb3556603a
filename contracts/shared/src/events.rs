use soroban_sdk::{symbol_short, Symbol};

// Splitter lifecycle
pub const SPLITTER_INITIALIZED: Symbol = symbol_short!("init");

// Registry events
pub const CONTRIBUTOR_REGISTERED: Symbol = symbol_short!("contr_reg");

// Ledger events
pub const PAYMENT_RECEIVED: Symbol = symbol_short!("pay_recv");
pub const PAYMENT_WITHDRAWN: Symbol = symbol_short!("pay_wdraw");
