#![cfg_attr(not(feature = "std"), no_std)]

//! Types and traits shared by the regulated-securities pallets.
//!
//! The compliance pipeline is split across several pallets that must not depend on
//! each other directly. They meet here instead:
//!
//! - [`WhitelistInspect`] is implemented by the whitelist pallet and consumed by the
//!   settings storage (to validate registrations) and the regulator (to verify parties).
//! - [`IssuerInspect`] is implemented by the settings storage and consumed by token
//!   whitelists, which clear an account when it issues a verified token.
//! - [`SettingsInspect`] is implemented by the settings storage and consumed by the
//!   regulator.
//! - [`TransferRestriction`] is implemented by the regulator and consumed by the token.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{weights::Weight, PalletError};
use scale_info::TypeInfo;
use sp_runtime::{traits::TrailingZeroInput, RuntimeDebug};
use sp_std::prelude::*;

mod slots;

pub use slots::{in_slot_order, SlotCursor, SlotError};

/// Identifier of a whitelist instance.
pub type WhitelistId = u32;

/// Why a transfer was refused by the regulator.
#[derive(
    Clone,
    Copy,
    Encode,
    Decode,
    DecodeWithMemTracking,
    Eq,
    PartialEq,
    RuntimeDebug,
    TypeInfo,
    MaxEncodedLen,
    PalletError,
)]
pub enum DenialReason {
    /// The token is locked by its issuer.
    Locked,
    /// The initial offer window is still open and only the issuer may distribute.
    InitialOfferPeriod,
    /// The sender would keep a remainder and partial transfers are disabled.
    PartialTransferDisallowed,
    /// The receiver holds nothing yet and new shareholders are not accepted.
    NewShareholdersDisallowed,
    /// No registered whitelist clears the party.
    NotWhitelisted,
    /// The registry has no active service.
    ServiceUnavailable,
}

/// Regulatory settings of a single token.
#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct TokenSettings<AccountId> {
    /// Account allowed to change the settings below.
    pub issuer: Option<AccountId>,
    /// Blocks every regulated transfer while set.
    pub locked: bool,
    /// Unix timestamp (seconds) until which only the issuer may send.
    pub initial_offer_end: u64,
    /// Whether accounts with a zero balance may receive.
    pub new_shareholders_allowed: bool,
    /// Whether a sender may move less than its full balance.
    pub partial_transfers_allowed: bool,
}

impl<AccountId> Default for TokenSettings<AccountId> {
    fn default() -> Self {
        Self {
            issuer: None,
            locked: false,
            initial_offer_end: 0,
            new_shareholders_allowed: false,
            partial_transfers_allowed: false,
        }
    }
}

impl<AccountId: PartialEq> TokenSettings<AccountId> {
    pub fn is_issuer(&self, who: &AccountId) -> bool {
        self.issuer.as_ref() == Some(who)
    }
}

/// Everything the regulator needs to know about one attempted transfer.
///
/// Balances are read by the token before the check so the decision is a pure
/// function of this value and the settings in force.
#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct TransferContext<TokenId, AccountId> {
    pub token: TokenId,
    pub from: AccountId,
    pub to: AccountId,
    pub amount: u128,
    pub from_balance: u128,
    pub to_balance: u128,
}

/// Read access to whitelist instances.
pub trait WhitelistInspect<AccountId> {
    /// Whether `whitelist` has been created.
    fn exists(whitelist: WhitelistId) -> bool;

    /// Whether `whitelist` clears `who`.
    fn verify(whitelist: WhitelistId, who: &AccountId) -> bool;

    /// Upper bound on the weight of one [`Self::verify`] call.
    fn verify_weight() -> Weight;
}

/// Read access to token issuers.
pub trait IssuerInspect<TokenId, AccountId> {
    fn is_issuer(token: &TokenId, who: &AccountId) -> bool;
}

/// Read access to per-token settings and to the registered whitelists.
pub trait SettingsInspect<TokenId, AccountId> {
    fn settings(token: &TokenId) -> TokenSettings<AccountId>;

    /// Registered whitelists in registration order, tombstones skipped.
    fn whitelists() -> Vec<WhitelistId>;

    /// Most whitelists [`Self::whitelists`] can return.
    fn max_whitelists() -> u32;
}

/// The compliance decision consulted before every regulated balance movement.
pub trait TransferRestriction<TokenId, AccountId> {
    fn check(context: &TransferContext<TokenId, AccountId>) -> Result<(), DenialReason>;

    /// Upper bound on the weight of one [`Self::check`] call, charged by the caller.
    fn check_weight() -> Weight;
}

/// The reserved null identity: the value decoded from an all-zero input.
pub fn null_identity<AccountId: Decode>() -> AccountId {
    AccountId::decode(&mut TrailingZeroInput::zeroes())
        .expect("infinite length input; no invalid inputs for type; qed")
}

/// Whether `who` is the reserved null identity.
pub fn is_null<AccountId: Decode + PartialEq>(who: &AccountId) -> bool {
    *who == null_identity::<AccountId>()
}
