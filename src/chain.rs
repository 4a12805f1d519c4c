// Target network and contract binding for the rating contract

use ethers::{contract::abigen, core::types::Address};

pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x9d1E517c84DF0A7672DA68784436813ae96b5FA8";

pub const FUJI_CHAIN_ID: u64 = 43113;
pub const FUJI_CHAIN_NAME: &str = "Avalanche Fuji";

/// Type tag the hosting platform expects on serialized transactions
pub const LEGACY_TX_TYPE: &str = "legacy";

abigen!(
    FeedbackContract,
    r#"[
        event FeedbackStored(address indexed sender, string message, uint8 rating, uint256 timestamp)
        event MessageUpdated(address indexed sender, string oldMessage, string newMessage, uint256 timestamp)
        event RatingUpdated(address indexed sender, uint8 oldRating, uint8 newRating, uint256 timestamp)

        function storeFeedback(string message, uint8 rating) external
        function updateMessage(string newMessage) external
        function updateRating(uint8 newRating) external

        function averageRating() external view returns (uint256)
        function feedbacks(uint256) external view returns (address sender, string message, uint8 rating, uint256 timestamp)
        function getMessageAndRatingByUser(address user) external view returns (string message, uint8 rating, uint256 timestamp)
        function getRatingCount() external view returns (uint256)
        function totalRatingsSum() external view returns (uint256)
        function userFeedbackIndex(address) external view returns (uint256)
    ]"#,
);

/// Where built transactions are sent: one contract on one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainTarget {
    pub contract_address: Address,
    pub chain_id: u64,
    pub chain_name: &'static str,
}

impl ChainTarget {
    pub fn fuji(contract_address: Address) -> Self {
        Self {
            contract_address,
            chain_id: FUJI_CHAIN_ID,
            chain_name: FUJI_CHAIN_NAME,
        }
    }
}
