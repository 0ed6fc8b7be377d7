use crate::invariants::Address;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub address: Address,
    pub bytes: u64,
}
