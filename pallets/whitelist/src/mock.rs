use crate as pallet_whitelist;
use core::cell::RefCell;
use frame_support::{derive_impl, traits::ConstU32};
use regsec_primitives::IssuerInspect;
use sp_runtime::BuildStorage;
use std::collections::BTreeMap;

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Whitelist: pallet_whitelist,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
}

thread_local! {
    static ISSUERS: RefCell<BTreeMap<u32, u64>> = RefCell::new(BTreeMap::new());
}

/// Token issuers as the settings storage would report them.
pub struct MockIssuers;

impl MockIssuers {
    pub fn set(token: u32, issuer: u64) {
        ISSUERS.with(|issuers| issuers.borrow_mut().insert(token, issuer));
    }
}

impl IssuerInspect<u32, u64> for MockIssuers {
    fn is_issuer(token: &u32, who: &u64) -> bool {
        ISSUERS.with(|issuers| issuers.borrow().get(token) == Some(who))
    }
}

impl pallet_whitelist::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type TokenId = u32;
    type Issuers = MockIssuers;
    type MaxQualifiers = ConstU32<4>;
    type MaxEntries = ConstU32<8>;
    type MaxTokens = ConstU32<4>;
    type MaxTypeLen = ConstU32<8>;
    type WeightInfo = ();
}

pub const OWNER: u64 = 1;
pub const QUALIFIER: u64 = 2;
pub const INVESTOR: u64 = 3;
pub const OTHER_INVESTOR: u64 = 4;
pub const HACKER: u64 = 5;

/// Genesis whitelist 0 is owned by `OWNER` and already verifies `OTHER_INVESTOR`.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_whitelist::GenesisConfig::<Test> {
        investor_whitelists: vec![(OWNER, vec![OTHER_INVESTOR])],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
