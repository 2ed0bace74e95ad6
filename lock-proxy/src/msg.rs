//! Message types for the lock proxy

use common::AmountEncoding;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, HexBinary, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to `fixed32`; must match the remote proxies
    pub amount_encoding: Option<AmountEncoding>,
}

#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Owner Operations
    // ========================================================================
    TransferOwnership {
        new_owner: String,
    },
    SetManager {
        manager: String,
    },
    /// Set the proxy on `to_chain_id` that receives this proxy's messages
    BindProxyHash {
        to_chain_id: u64,
        target_proxy: HexBinary,
    },
    /// Set the asset on `to_chain_id` that `from_asset` is redeemed as
    BindAssetHash {
        from_asset: String,
        to_chain_id: u64,
        to_asset: HexBinary,
    },

    // ========================================================================
    // Transfers
    // ========================================================================
    /// Escrow `amount` of `from_asset` and send it to `to_address` on
    /// `to_chain_id`. The asset must have bound this proxy as its lock proxy.
    Lock {
        from_asset: String,
        to_chain_id: u64,
        to_address: HexBinary,
        amount: Uint128,
    },

    /// Release escrow for a proven inbound message.
    ///
    /// Authorization: cross-chain manager only
    Unlock {
        args: HexBinary,
        from_contract: HexBinary,
        from_chain_id: u64,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(OwnerResponse)]
    Owner {},

    #[returns(ManagerResponse)]
    Manager {},

    /// Escrow address holding locked tokens
    #[returns(LockProxyAddrResponse)]
    LockProxyAddr {},

    #[returns(ProxyHashResponse)]
    ProxyHash { to_chain_id: u64 },

    #[returns(AssetHashResponse)]
    AssetHash {
        from_asset: String,
        to_chain_id: u64,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub manager: Option<Addr>,
    pub amount_encoding: AmountEncoding,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct ManagerResponse {
    pub manager: Option<Addr>,
}

#[cw_serde]
pub struct LockProxyAddrResponse {
    pub address: Addr,
}

#[cw_serde]
pub struct ProxyHashResponse {
    pub to_chain_id: u64,
    pub proxy_hash: Option<HexBinary>,
}

#[cw_serde]
pub struct AssetHashResponse {
    pub from_asset: String,
    pub to_chain_id: u64,
    pub asset_hash: Option<HexBinary>,
}
