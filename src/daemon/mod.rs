// Daemon module
// Public interface for talking to a wallet daemon

mod client;
mod error;
mod types;

pub use client::DaemonClient;
pub use error::DaemonError;
pub use types::{Block, Output, SyncRequest, Transaction, WalletSyncData};
