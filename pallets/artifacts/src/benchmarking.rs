use super::*;

#[allow(unused)]
use crate::Pallet as Artifacts;
use crate::types::Artifact;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use sp_runtime::traits::SaturatedConversion;
use alloc::vec;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn register_artifact(
        n: Linear<0, { T::MaxNameLength::get() }>,
        c: Linear<0, { T::MaxCidLength::get() }>,
    ) {
        let caller: T::AccountId = whitelisted_caller();
        let name = vec![0u8; n as usize];
        let metadata_cid = vec![0u8; c as usize];

        #[extrinsic_call]
        register_artifact(RawOrigin::Signed(caller), name, metadata_cid, 100u128);
    }

    #[benchmark]
    fn transfer_artifact() {
        let caller: T::AccountId = whitelisted_caller();
        let receiver: T::AccountId = account("receiver", 0, 0);
        let name = vec![7u8; 16];

        Artifacts::<T>::register_artifact(
            RawOrigin::Signed(caller.clone()).into(),
            name.clone(),
            vec![],
            100u128,
        )
        .expect("registration succeeds");

        let timestamp: u64 = <pallet_timestamp::Pallet<T>>::get().saturated_into();
        let asset_id = Artifact::generate_artifact_id(&caller, timestamp, &name);

        #[extrinsic_call]
        transfer_artifact(RawOrigin::Signed(caller), asset_id, receiver);
    }

    impl_benchmark_test_suite!(Artifacts, crate::mock::new_test_ext(), crate::mock::Test);
}
