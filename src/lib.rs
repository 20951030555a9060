//! Holochain integrity zome scaffolding.
//!
//! Facade over [`zome_scaffold_sdk`]. The command-line front end lives in the
//! `zome-scaffold-ctl` crate.

pub use zome_scaffold_sdk::*;
