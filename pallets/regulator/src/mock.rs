use crate as pallet_regulator;
use core::{cell::Cell, time::Duration};
use frame_support::{
    derive_impl,
    traits::{ConstU32, UnixTime},
};
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Whitelist: pallet_whitelist,
        SettingsStorage: pallet_settings_storage,
        Regulator: pallet_regulator,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
}

impl pallet_whitelist::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type TokenId = u32;
    type Issuers = SettingsStorage;
    type MaxQualifiers = ConstU32<4>;
    type MaxEntries = ConstU32<16>;
    type MaxTokens = ConstU32<4>;
    type MaxTypeLen = ConstU32<8>;
    type WeightInfo = ();
}

impl pallet_settings_storage::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type TokenId = u32;
    type Whitelists = Whitelist;
    type MaxWhitelists = ConstU32<4>;
    type MaxMessagingAddressLen = ConstU32<32>;
    type WeightInfo = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = ();
}

thread_local! {
    static NOW: Cell<u64> = const { Cell::new(1_000) };
}

/// Wall clock in seconds, set by the test.
pub struct MockTime;

impl MockTime {
    pub fn set(secs: u64) {
        NOW.with(|now| now.set(secs));
    }
}

impl UnixTime for MockTime {
    fn now() -> Duration {
        Duration::from_secs(NOW.with(|now| now.get()))
    }
}

impl pallet_regulator::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type TokenId = u32;
    type Settings = SettingsStorage;
    type Whitelists = Whitelist;
    type Time = MockTime;
    type WeightInfo = ();
}

pub const OWNER: u64 = 1;
pub const ISSUER: u64 = 2;
pub const ALICE: u64 = 3;
pub const BOB: u64 = 4;
pub const STRANGER: u64 = 5;

pub const TOKEN: u32 = 1;

/// Registry owned by `OWNER` with a `Standard` service active (id 0). `ISSUER` issues
/// `TOKEN`. Whitelist 0, owned by `OWNER`, clears `ISSUER`, `ALICE` and `BOB` but
/// is not registered with the settings storage yet.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_whitelist::GenesisConfig::<Test> {
        investor_whitelists: vec![(OWNER, vec![ISSUER, ALICE, BOB])],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_settings_storage::GenesisConfig::<Test> {
        owner: Some(OWNER),
        officers: vec![],
        whitelists: vec![],
        issuers: vec![(TOKEN, ISSUER)],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_regulator::GenesisConfig::<Test> {
        owner: Some(OWNER),
        initial_service: Some(crate::ServicePolicy::Standard),
    }
    .assimilate_storage(&mut t)
    .unwrap();

    MockTime::set(1_000);
    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
