use crate as pallet_multisig_arbitration;
use crate::RetryPolicy;
use frame_support::{derive_impl, parameter_types, traits::ConstU32, weights::Weight, PalletId};
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        MultisigArbitration: pallet_multisig_arbitration,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
}

parameter_types! {
    pub const MultisigPalletId: PalletId = PalletId(*b"rs/msarb");
    pub storage Retry: RetryPolicy = RetryPolicy::Retry;
}

impl pallet_multisig_arbitration::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type RuntimeCall = RuntimeCall;
    type PalletId = MultisigPalletId;
    type MaxOwners = ConstU32<4>;
    type MaxCallSize = ConstU32<128>;
    type RetryPolicy = Retry;
    type WeightInfo = ();
}

pub const ALICE: u64 = 1;
pub const BOB: u64 = 2;
pub const CAROL: u64 = 3;
pub const DAVE: u64 = 4;
pub const EVE: u64 = 5;

/// ALICE, BOB and CAROL, two confirmations needed.
pub const BOARD: u32 = 0;
/// ALICE alone.
pub const SOLO: u32 = 1;

/// Covers every call the tests queue.
pub const MAX_WEIGHT: Weight = Weight::from_parts(1_000_000_000_000, 1_000_000);

pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_multisig_arbitration::GenesisConfig::<Test> {
        wallets: vec![(vec![ALICE, BOB, CAROL], 2), (vec![ALICE], 1)],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
