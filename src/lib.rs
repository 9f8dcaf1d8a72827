// Syncping - Wallet daemon sync probe
// Library exports

pub mod config;
pub mod daemon;
