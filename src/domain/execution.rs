// Shared "build call -> wrap in transaction -> serialize" pipeline used by every
// transaction-building endpoint

use ethers::{
    core::{
        abi::AbiEncode,
        types::{transaction::eip2718::TypedTransaction, Bytes, TransactionRequest},
    },
    utils::to_checksum,
};
use tracing::debug;

use super::DomainError;
use crate::chain::{ChainTarget, FeedbackContractCalls, LEGACY_TX_TYPE};
use crate::models::{ExecutionResponse, SerializableTransaction};

/// Wrap a contract call in an unsigned legacy transaction to the target contract
pub fn build_transaction(call: FeedbackContractCalls, target: &ChainTarget) -> TypedTransaction {
    let data = Bytes::from(call.encode());

    let request = TransactionRequest::new()
        .to(target.contract_address)
        .data(data)
        .chain_id(target.chain_id);

    TypedTransaction::Legacy(request)
}

/// Serialize an unsigned transaction to the JSON form wallets on the platform sign
pub fn serialize_transaction(tx: &TypedTransaction) -> Result<String, DomainError> {
    if !matches!(tx, TypedTransaction::Legacy(_)) {
        return Err(DomainError::Encoding(
            "only legacy transactions are supported".to_string(),
        ));
    }

    let to = tx
        .to_addr()
        .ok_or_else(|| DomainError::Encoding("transaction has no destination".to_string()))?;
    let chain_id = tx
        .chain_id()
        .ok_or_else(|| DomainError::Encoding("transaction has no chain id".to_string()))?;

    let wire = SerializableTransaction {
        to: to_checksum(to, None),
        data: tx.data().cloned().unwrap_or_default(),
        chain_id: chain_id.as_u64(),
        tx_type: LEGACY_TX_TYPE.to_string(),
    };

    Ok(serde_json::to_string(&wire)?)
}

/// Encode `call`, build the unsigned transaction, and shape the response body.
pub fn prepare_execution(
    call: impl Into<FeedbackContractCalls>,
    target: &ChainTarget,
) -> Result<ExecutionResponse, DomainError> {
    let tx = build_transaction(call.into(), target);

    debug!(
        calldata_len = tx.data().map(|d| d.len()).unwrap_or_default(),
        chain_id = target.chain_id,
        "Built unsigned transaction"
    );

    Ok(ExecutionResponse {
        serialized_transaction: serialize_transaction(&tx)?,
        chain_id: target.chain_name.to_string(),
    })
}
