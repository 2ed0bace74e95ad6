//! Message types for the cross-chain manager

use common::ConsensusPeer;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, HexBinary, Uint256};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct InstantiateMsg {
    /// Chain id of this chain in the relay network
    pub chain_id: u64,
}

#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Install the first consensus peer set from a genesis header.
    ///
    /// Authorization: deployer only, once
    InitGenesisBlock { raw_header: HexBinary },

    /// Rotate the consensus peer set using a header signed by the current set
    /// that announces the next one.
    ///
    /// Authorization: anyone (relayer)
    ChangeBookKeeper { raw_header: HexBinary },

    /// Register an outbound message. The caller is recorded as the source
    /// contract.
    CrossChain {
        to_chain_id: u64,
        to_contract: HexBinary,
        method: String,
        args: HexBinary,
    },

    /// Prove an inbound message against a relay header and dispatch it to its
    /// target contract.
    ///
    /// `header_proof` and `cur_raw_header` are only consulted when
    /// `raw_header` predates the current epoch. The anchor header must then
    /// verify against the current set and commit `raw_header` in its block
    /// root.
    VerifyHeaderAndExecuteTx {
        proof: HexBinary,
        raw_header: HexBinary,
        header_proof: HexBinary,
        cur_raw_header: HexBinary,
    },
}

/// Body of the message delivered to a target contract, keyed by the method
/// name: `{ "<method>": CrossChainCall }`
#[cw_serde]
pub struct CrossChainCall {
    pub args: HexBinary,
    pub from_contract: HexBinary,
    pub from_chain_id: u64,
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(ConsensusPeersResponse)]
    ConsensusPeers {},

    #[returns(EpochHeightResponse)]
    EpochHeight {},

    /// Next outbound cross-chain id
    #[returns(CrossChainCounterResponse)]
    CrossChainCounter {},

    #[returns(ToPolyTxResponse)]
    ToPolyTx { cross_chain_id: HexBinary },

    #[returns(IsTxExecutedResponse)]
    IsTxExecuted {
        from_chain_id: u64,
        cross_chain_id: HexBinary,
    },

    #[returns(GenesisHeaderResponse)]
    GenesisHeader {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub chain_id: u64,
    pub deployer: Addr,
}

#[cw_serde]
pub struct ConsensusPeersResponse {
    pub chain_id: u64,
    pub height: u32,
    pub peers: Vec<ConsensusPeer>,
    /// Binary form as emitted on rotation
    pub raw: HexBinary,
}

#[cw_serde]
pub struct EpochHeightResponse {
    pub height: u32,
}

#[cw_serde]
pub struct CrossChainCounterResponse {
    pub counter: Uint256,
}

#[cw_serde]
pub struct ToPolyTxResponse {
    pub cross_chain_id: HexBinary,
    /// Serialized `MakeTxParam`, if the id was issued
    pub raw_param: Option<HexBinary>,
}

#[cw_serde]
pub struct IsTxExecutedResponse {
    pub executed: bool,
}

#[cw_serde]
pub struct GenesisHeaderResponse {
    pub raw_header: Option<HexBinary>,
}
