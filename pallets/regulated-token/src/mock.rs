use crate as pallet_regulated_token;
use core::cell::Cell;
use frame_support::{derive_impl, traits::ConstU32, weights::Weight};
use regsec_primitives::{DenialReason, TransferContext, TransferRestriction};
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        RegulatedToken: pallet_regulated_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
}

thread_local! {
    static DENIAL: Cell<Option<DenialReason>> = const { Cell::new(None) };
    static CHECKS: Cell<u32> = const { Cell::new(0) };
}

/// Allows everything until told to deny. Counts how often it was asked.
pub struct MockRegulator;

impl MockRegulator {
    pub fn deny(reason: DenialReason) {
        DENIAL.with(|denial| denial.set(Some(reason)));
    }

    pub fn allow() {
        DENIAL.with(|denial| denial.set(None));
    }

    pub fn checks() -> u32 {
        CHECKS.with(|checks| checks.get())
    }
}

impl TransferRestriction<u32, u64> for MockRegulator {
    fn check(_: &TransferContext<u32, u64>) -> Result<(), DenialReason> {
        CHECKS.with(|checks| checks.set(checks.get() + 1));
        DENIAL.with(|denial| denial.get()).map_or(Ok(()), Err)
    }

    fn check_weight() -> Weight {
        Weight::from_parts(7_000_000, 1_000)
    }
}

impl pallet_regulated_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type TokenId = u32;
    type Regulator = MockRegulator;
    type MaxNameLen = ConstU32<32>;
    type MaxSymbolLen = ConstU32<8>;
    type WeightInfo = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = ();
}

pub const OWNER: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const ARBITRATOR: u64 = 4;
pub const HACKER: u64 = 5;

pub const TOKEN: u32 = 1;

/// `TOKEN` is owned by `OWNER`, who holds 100 units. Minting is still open and no
/// arbitrator is linked.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_regulated_token::GenesisConfig::<Test> {
        tokens: vec![(TOKEN, OWNER, b"Aboveboard Stock".to_vec(), b"ABST".to_vec(), 0)],
        balances: vec![(TOKEN, OWNER, 100)],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    MockRegulator::allow();
    CHECKS.with(|checks| checks.set(0));
    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
