use crate as pallet_settings_storage;
use frame_support::{derive_impl, traits::ConstU32, weights::Weight};
use regsec_primitives::{WhitelistId, WhitelistInspect};
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        SettingsStorage: pallet_settings_storage,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
}

/// Whitelists `0..10` exist; nobody is verified.
pub struct MockWhitelists;

impl WhitelistInspect<u64> for MockWhitelists {
    fn exists(whitelist: WhitelistId) -> bool {
        whitelist < 10
    }

    fn verify(_: WhitelistId, _: &u64) -> bool {
        false
    }

    fn verify_weight() -> Weight {
        Weight::zero()
    }
}

impl pallet_settings_storage::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type TokenId = u32;
    type Whitelists = MockWhitelists;
    type MaxWhitelists = ConstU32<4>;
    type MaxMessagingAddressLen = ConstU32<16>;
    type WeightInfo = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = ();
}

pub const OWNER: u64 = 1;
pub const OFFICER: u64 = 2;
pub const ISSUER: u64 = 3;
pub const NEW_ISSUER: u64 = 4;
pub const HACKER: u64 = 5;

/// Token with an issuer at genesis.
pub const TOKEN: u32 = 7;
/// Token nobody issues yet.
pub const FRESH_TOKEN: u32 = 8;

/// `OWNER` owns the store, `OFFICER` is an officer, `ISSUER` issues `TOKEN`, and
/// whitelist 0 is registered.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_settings_storage::GenesisConfig::<Test> {
        owner: Some(OWNER),
        officers: vec![OFFICER],
        whitelists: vec![0],
        issuers: vec![(TOKEN, ISSUER)],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
