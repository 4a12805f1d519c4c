use ethers::core::types::Bytes;
use serde::{Deserialize, Serialize};

/// Response body for every transaction-building endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResponse {
    pub serialized_transaction: String,
    /// Human-readable network name, not the numeric id
    pub chain_id: String,
}

/// Wire form of an unsigned transaction as handed to the user's wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializableTransaction {
    /// EIP-55 checksummed destination
    pub to: String,
    pub data: Bytes,
    pub chain_id: u64,
    #[serde(rename = "type")]
    pub tx_type: String,
}
