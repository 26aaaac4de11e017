use crate as pallet_access_rights;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU128, ConstU32, ConstU64},
};
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

pub const CREATOR: u64 = 1;
pub const BUYER: u64 = 2;
pub const OTHER_BUYER: u64 = 3;
pub const ORACLE: u64 = 42;
pub const GOVERNOR: u64 = 99;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Balances: pallet_balances,
        Artifacts: pallet_artifacts,
        AccessRights: pallet_access_rights,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
    type AccountData = pallet_balances::AccountData<u128>;
}

impl pallet_timestamp::Config for Test {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<5>;
    type WeightInfo = ();
}

impl pallet_balances::Config for Test {
    type MaxLocks = ConstU32<50>;
    type MaxReserves = ();
    type ReserveIdentifier = [u8; 8];
    type Balance = u128;
    type RuntimeEvent = RuntimeEvent;
    type DustRemoval = ();
    type ExistentialDeposit = ConstU128<1>;
    type AccountStore = System;
    type WeightInfo = ();
    type FreezeIdentifier = ();
    type MaxFreezes = ();
    type RuntimeHoldReason = ();
    type RuntimeFreezeReason = ();
    type DoneSlashHandler = ();
}

parameter_types! {
    pub const MaxNameLength: u32 = 64;
    pub const MaxCidLength: u32 = 128;
}

impl pallet_artifacts::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxNameLength = MaxNameLength;
    type MaxCidLength = MaxCidLength;
}

parameter_types! {
    pub const MarketOracleAccount: u64 = ORACLE;
    pub const GovernanceAccount: u64 = GOVERNOR;
    pub const MaxActionLength: u32 = 64;
}

impl pallet_access_rights::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Currency = Balances;
    type ArtifactProvider = Artifacts;
    type MarketOracle = MarketOracleAccount;
    type GovernanceAuthority = GovernanceAccount;
    type MaxActionLength = MaxActionLength;
}

pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default()
        .build_storage()
        .unwrap();
    pallet_balances::GenesisConfig::<Test> {
        balances: vec![(BUYER, 1_000_000_000), (OTHER_BUYER, 1_000_000_000)],
        ..Default::default()
    }
    .assimilate_storage(&mut t)
    .unwrap();
    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
