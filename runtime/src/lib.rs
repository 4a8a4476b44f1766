#![cfg_attr(not(feature = "std"), no_std)]

//! Runtime wiring the regulated-securities pallets together.
//!
//! Transfers on [`RegulatedToken`] are checked by [`Regulator`], which reads token
//! settings from [`SettingsStorage`] and clears parties through [`Whitelist`].
//! [`MultisigArbitration`] wallets act as token arbitrators and govern themselves.

use frame_support::{
    construct_runtime, derive_impl, parameter_types,
    traits::{ConstU128, ConstU32, ConstU64, VariantCountOf},
    PalletId,
};
use pallet_multisig_arbitration::RetryPolicy;
use sp_runtime::{
    generic,
    traits::{BlakeTwo256, IdentifyAccount, Verify},
    MultiAddress, MultiSignature,
};


pub type Signature = MultiSignature;
pub type AccountId = <<Signature as Verify>::Signer as IdentifyAccount>::AccountId;
pub type Balance = u128;
pub type Nonce = u32;
pub type BlockNumber = u32;
pub type TokenId = u32;

pub type Address = MultiAddress<AccountId, ()>;
pub type Header = generic::Header<BlockNumber, BlakeTwo256>;
pub type TxExtension = (
    frame_system::CheckNonZeroSender<Runtime>,
    frame_system::CheckSpecVersion<Runtime>,
    frame_system::CheckTxVersion<Runtime>,
    frame_system::CheckGenesis<Runtime>,
    frame_system::CheckEra<Runtime>,
    frame_system::CheckNonce<Runtime>,
    frame_system::CheckWeight<Runtime>,
);
pub type UncheckedExtrinsic =
    generic::UncheckedExtrinsic<Address, RuntimeCall, Signature, TxExtension>;
pub type Block = generic::Block<Header, UncheckedExtrinsic>;

pub const UNIT: Balance = 1_000_000_000_000;
pub const EXISTENTIAL_DEPOSIT: Balance = UNIT / 1_000;

/// Target block time; the timestamp pallet rejects faster blocks.
pub const MILLISECS_PER_BLOCK: u64 = 6_000;

construct_runtime!(
    pub enum Runtime {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Balances: pallet_balances,
        Whitelist: pallet_whitelist,
        SettingsStorage: pallet_settings_storage,
        Regulator: pallet_regulator,
        RegulatedToken: pallet_regulated_token,
        MultisigArbitration: pallet_multisig_arbitration,
    }
);

#[derive_impl(frame_system::config_preludes::SolochainDefaultConfig)]
impl frame_system::Config for Runtime {
    type Block = Block;
    type AccountId = AccountId;
    type Nonce = Nonce;
    type AccountData = pallet_balances::AccountData<Balance>;
}

impl pallet_timestamp::Config for Runtime {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<{ MILLISECS_PER_BLOCK / 2 }>;
    type WeightInfo = ();
}

impl pallet_balances::Config for Runtime {
    type MaxLocks = ConstU32<50>;
    type MaxReserves = ();
    type ReserveIdentifier = [u8; 8];
    type Balance = Balance;
    type RuntimeEvent = RuntimeEvent;
    type DustRemoval = ();
    type ExistentialDeposit = ConstU128<EXISTENTIAL_DEPOSIT>;
    type AccountStore = System;
    type WeightInfo = pallet_balances::weights::SubstrateWeight<Runtime>;
    type FreezeIdentifier = RuntimeFreezeReason;
    type MaxFreezes = VariantCountOf<RuntimeFreezeReason>;
    type RuntimeHoldReason = RuntimeHoldReason;
    type RuntimeFreezeReason = RuntimeFreezeReason;
    type DoneSlashHandler = ();
}

impl pallet_whitelist::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type TokenId = TokenId;
    type Issuers = SettingsStorage;
    type MaxQualifiers = ConstU32<32>;
    type MaxEntries = ConstU32<10_000>;
    type MaxTokens = ConstU32<16>;
    type MaxTypeLen = ConstU32<32>;
    type WeightInfo = pallet_whitelist::weights::SubstrateWeight<Runtime>;
}

impl pallet_settings_storage::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type TokenId = TokenId;
    type Whitelists = Whitelist;
    type MaxWhitelists = ConstU32<16>;
    type MaxMessagingAddressLen = ConstU32<256>;
    type WeightInfo = pallet_settings_storage::weights::SubstrateWeight<Runtime>;
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = ();
}

impl pallet_regulator::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type TokenId = TokenId;
    type Settings = SettingsStorage;
    type Whitelists = Whitelist;
    type Time = Timestamp;
    type WeightInfo = pallet_regulator::weights::SubstrateWeight<Runtime>;
}

impl pallet_regulated_token::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type TokenId = TokenId;
    type Regulator = Regulator;
    type MaxNameLen = ConstU32<64>;
    type MaxSymbolLen = ConstU32<16>;
    type WeightInfo = pallet_regulated_token::weights::SubstrateWeight<Runtime>;
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = ();
}

parameter_types! {
    pub const ArbitrationPalletId: PalletId = PalletId(*b"rs/msarb");
    /// Failed arbitration payloads stay pending and may be attempted again.
    pub const ArbitrationRetry: RetryPolicy = RetryPolicy::Retry;
}

impl pallet_multisig_arbitration::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type RuntimeCall = RuntimeCall;
    type PalletId = ArbitrationPalletId;
    type MaxOwners = ConstU32<16>;
    type MaxCallSize = ConstU32<1_024>;
    type RetryPolicy = ArbitrationRetry;
    type WeightInfo = pallet_multisig_arbitration::weights::SubstrateWeight<Runtime>;
}
