// Request/response types for the wallet sync endpoint
//
// The daemon speaks camelCase JSON; serde renames keep the Rust side
// idiomatic. The response model covers the fields wallets actually
// consume and ignores the rest.

use serde::{Deserialize, Serialize};

/// Request body for `/getwalletsyncdata`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    /// Number of blocks to return per call
    pub block_count: u64,

    /// Known block hashes, newest first, used by the daemon to locate
    /// the fork point
    pub block_hash_checkpoints: Vec<String>,

    /// Skip coinbase transactions in the returned blocks
    pub skip_coinbase_transactions: bool,

    /// Height to start syncing from (ignored when checkpoints are given)
    pub start_height: u64,

    /// Timestamp to start syncing from
    pub start_timestamp: u64,
}

impl SyncRequest {
    /// The minimal probe request: a single block from the chain start
    /// with coinbase transactions skipped.
    pub fn ping() -> Self {
        Self {
            block_count: 1,
            block_hash_checkpoints: Vec::new(),
            skip_coinbase_transactions: true,
            start_height: 0,
            start_timestamp: 0,
        }
    }

    /// Create a request for a batch of blocks from the chain start.
    pub fn new(block_count: u64) -> Self {
        Self {
            block_count,
            block_hash_checkpoints: Vec::new(),
            skip_coinbase_transactions: false,
            start_height: 0,
            start_timestamp: 0,
        }
    }

    /// Set the block hash checkpoints
    pub fn with_checkpoints(mut self, checkpoints: Vec<String>) -> Self {
        self.block_hash_checkpoints = checkpoints;
        self
    }

    /// Set the start height
    pub fn with_start_height(mut self, height: u64) -> Self {
        self.start_height = height;
        self
    }

    /// Set the start timestamp
    pub fn with_start_timestamp(mut self, timestamp: u64) -> Self {
        self.start_timestamp = timestamp;
        self
    }

    /// Skip coinbase transactions
    pub fn with_skip_coinbase(mut self, skip: bool) -> Self {
        self.skip_coinbase_transactions = skip;
        self
    }
}

/// Response body from `/getwalletsyncdata`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WalletSyncData {
    /// Blocks in the requested range, oldest first
    #[serde(default)]
    pub items: Vec<Block>,
}

/// A block as returned by the sync endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Height of this block
    pub block_height: u64,

    /// Miner reward transaction, absent when the request skipped them
    #[serde(default, rename = "coinbaseTX", skip_serializing_if = "Option::is_none")]
    pub coinbase_tx: Option<Transaction>,

    /// Regular transactions in this block
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// All transactions in this block, coinbase first when present.
    pub fn all_transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.coinbase_tx.iter().chain(self.transactions.iter())
    }
}

/// A transaction within a synced block.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// One-time public key the outputs were derived from
    pub tx_public_key: String,

    /// Block height or timestamp before which outputs cannot be spent
    #[serde(default)]
    pub unlock_time: u64,

    /// Outputs of this transaction
    #[serde(default)]
    pub outputs: Vec<Output>,
}

/// A single transaction output.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Output {
    /// Output public key
    pub key: String,

    /// Amount in atomic units
    pub amount: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ping_request_body() {
        let body = serde_json::to_value(SyncRequest::ping()).unwrap();
        assert_eq!(
            body,
            json!({
                "blockCount": 1,
                "blockHashCheckpoints": [],
                "skipCoinbaseTransactions": true,
                "startHeight": 0,
                "startTimestamp": 0,
            })
        );
    }

    #[test]
    fn test_request_builders() {
        let request = SyncRequest::new(100)
            .with_start_height(5000)
            .with_checkpoints(vec!["abc123".to_string()])
            .with_skip_coinbase(true);

        assert_eq!(request.block_count, 100);
        assert_eq!(request.start_height, 5000);
        assert_eq!(request.block_hash_checkpoints, vec!["abc123".to_string()]);
        assert!(request.skip_coinbase_transactions);
        assert_eq!(request.start_timestamp, 0);
    }

    #[test]
    fn test_sync_data_parsing() {
        let raw = json!({
            "items": [{
                "blockHeight": 42,
                "coinbaseTX": {
                    "txPublicKey": "aa",
                    "unlockTime": 100,
                    "outputs": [{"key": "k0", "amount": 2000}],
                },
                "transactions": [{
                    "hash": "deadbeef",
                    "txPublicKey": "bb",
                    "outputs": [
                        {"key": "k1", "amount": 10},
                        {"key": "k2", "amount": 25},
                    ],
                }],
            }],
            "synced": false,
        })
        .to_string();

        let data: WalletSyncData = serde_json::from_str(&raw).unwrap();
        assert_eq!(data.items.len(), 1);

        let block = &data.items[0];
        assert_eq!(block.block_height, 42);
        assert_eq!(block.all_transactions().count(), 2);

        let coinbase = block.coinbase_tx.as_ref().unwrap();
        assert_eq!(coinbase.unlock_time, 100);
        assert_eq!(coinbase.outputs[0].amount, 2000);

        let tx = &block.transactions[0];
        assert_eq!(tx.hash.as_deref(), Some("deadbeef"));
        assert_eq!(tx.unlock_time, 0);
        assert_eq!(tx.outputs.len(), 2);
    }

    #[test]
    fn test_empty_sync_data() {
        let data: WalletSyncData = serde_json::from_str("{}").unwrap();
        assert!(data.items.is_empty());
    }
}
