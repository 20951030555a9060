/// crates.io <https://crates.io/crates/holochain_deterministic_integrity/versions>
pub const HDI_VERSION: &str = "0.2.4";

/// crates.io <https://crates.io/crates/serde/versions>
pub const SERDE_VERSION: &str = "1";
