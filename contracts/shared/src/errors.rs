use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,

    // Input errors
    InvalidIdentity = 4,
    InvalidShareRange = 5,
    ZeroAmount = 6,

    // Registry errors
    AlreadyRegistered = 7,
    ShareCeilingExceeded = 8,
    BatchEmpty = 9,
    BatchLimitExceeded = 10,

    // Ledger errors
    NotAContributor = 11,
    NothingDue = 12,
    TransferFailed = 13,
    Reentrancy = 14,
    Overflow = 15,
}
