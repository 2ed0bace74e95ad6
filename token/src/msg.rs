//! Message types for the token contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, HexBinary, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    /// Must be positive
    pub decimals: u8,
    /// Must be positive
    pub total_supply: Uint128,
    /// Cross-chain manager; only accepted with `cross_chain`
    pub manager: Option<String>,
    pub lock_proxy: Option<String>,
    /// Credit the initial supply to the escrow instead of the owner: the
    /// contract itself with `cross_chain`, otherwise the lock proxy
    #[serde(default)]
    pub escrow_supply: bool,
    /// Enable the token's own Lock/Unlock
    #[serde(default)]
    pub cross_chain: bool,
}

#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    Approve {
        spender: String,
        amount: Uint128,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
    },
    /// Destroy tokens held by the sender
    Burn { amount: Uint128 },

    // ========================================================================
    // Owner Operations
    // ========================================================================
    Mint {
        recipient: String,
        amount: Uint128,
    },
    TransferOwnership { new_owner: String },
    SetLockProxy { lock_proxy: String },
    /// Cross-chain mode only
    SetManager { manager: String },
    /// Cross-chain mode only
    BindProxyHash {
        to_chain_id: u64,
        target_proxy: HexBinary,
    },
    /// Cross-chain mode only
    BindAssetHash {
        to_chain_id: u64,
        to_asset: HexBinary,
    },

    // ========================================================================
    // Cross-Chain Operations
    // ========================================================================
    /// Escrow `amount` and register an `unlock` with the manager
    Lock {
        to_chain_id: u64,
        to_address: HexBinary,
        amount: Uint128,
    },
    /// Authorization: cross-chain manager only
    Unlock {
        args: HexBinary,
        from_contract: HexBinary,
        from_chain_id: u64,
    },

    // ========================================================================
    // Lock Proxy Operations
    // ========================================================================
    /// Move tokens between a user and the lock proxy escrow without an
    /// allowance.
    ///
    /// Authorization: bound lock proxy only
    ProxyTransfer {
        from: String,
        to: String,
        amount: Uint128,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},

    #[returns(cw20::BalanceResponse)]
    Balance { address: String },

    #[returns(cw20::AllowanceResponse)]
    Allowance { owner: String, spender: String },

    #[returns(OwnerResponse)]
    Owner {},

    #[returns(ManagerResponse)]
    Manager {},

    #[returns(LockProxyResponse)]
    LockProxy {},

    /// Whether the token-native cross-chain mode is enabled
    #[returns(IsCrossChainOnResponse)]
    IsCrossChainOn {},

    #[returns(ProxyHashResponse)]
    ProxyHash { to_chain_id: u64 },

    #[returns(AssetHashResponse)]
    AssetHash { to_chain_id: u64 },
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
pub struct LockProxyResponse {
    pub lock_proxy: Option<Addr>,
}

#[cw_serde]
pub struct IsCrossChainOnResponse {
    pub enabled: bool,
}

#[cw_serde]
pub struct ProxyHashResponse {
    pub to_chain_id: u64,
    pub proxy_hash: Option<HexBinary>,
}

#[cw_serde]
pub struct AssetHashResponse {
    pub to_chain_id: u64,
    pub asset_hash: Option<HexBinary>,
}
