//! # Artifacts Pallet
//!
//! A registry pallet for digital cultural artifacts.
//!
//! ## Overview
//!
//! Each artifact record carries the creation-time cultural value, the
//! creator and the creation timestamp, all immutable after registration.
//! Only the current-owner relation is mutable, through `transfer_artifact`.
//! Sibling pallets read the registry through the `ArtifactProvider` trait
//! and never touch its storage directly.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
use alloc::vec::Vec;

pub use pallet::*;
pub mod types;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

#[frame_support::pallet]
pub mod pallet {
    use super::*;
    use frame_support::pallet_prelude::*;
    use frame_system::pallet_prelude::*;
    use sp_runtime::traits::SaturatedConversion;

    use pallet_shared_traits::{ArtifactInfo, ArtifactProvider, ArtifactQueryError};

    use crate::types::*;

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    #[pallet::config]
    pub trait Config: frame_system::Config + pallet_timestamp::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        #[pallet::constant]
        type MaxNameLength: Get<u32>;

        #[pallet::constant]
        type MaxCidLength: Get<u32>;
    }

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        ArtifactRegistered { asset_id: [u8; 32], owner: T::AccountId, cultural_value: u128 },
        ArtifactTransferred { asset_id: [u8; 32], from: T::AccountId, to: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        ArtifactNotFound,
        ArtifactAlreadyExists,
        NotOwner,
        NameTooLong,
        CidTooLong,
    }

    #[pallet::storage]
    #[pallet::getter(fn registered_artifacts)]
    pub type RegisteredArtifacts<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        [u8; 32],
        Artifact<T::AccountId>,
    >;

    /// 已登记文物总数
    #[pallet::storage]
    #[pallet::getter(fn artifact_count)]
    pub type ArtifactCount<T: Config> = StorageValue<_, u32, ValueQuery>;

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// 登记一件文物，文化价值在此刻固定，之后永不修改
        #[pallet::call_index(0)]
        #[pallet::weight(10_000)]
        pub fn register_artifact(
            origin: OriginFor<T>,
            name: Vec<u8>,
            metadata_cid: Vec<u8>,
            cultural_value: u128,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            ensure!(
                name.len() <= T::MaxNameLength::get() as usize,
                Error::<T>::NameTooLong
            );
            ensure!(
                metadata_cid.len() <= T::MaxCidLength::get() as usize,
                Error::<T>::CidTooLong
            );

            let timestamp = Self::current_timestamp();
            let asset_id = Artifact::generate_artifact_id(&who, timestamp, &name);
            ensure!(
                !RegisteredArtifacts::<T>::contains_key(asset_id),
                Error::<T>::ArtifactAlreadyExists
            );

            let name = BoundedVec::try_from(name).map_err(|_| Error::<T>::NameTooLong)?;
            let metadata_cid =
                BoundedVec::try_from(metadata_cid).map_err(|_| Error::<T>::CidTooLong)?;

            let artifact = Artifact {
                cultural_value,
                creator: who.clone(),
                created_at: timestamp,
                owner: who.clone(),
                name,
                metadata_cid,
            };

            RegisteredArtifacts::<T>::insert(asset_id, &artifact);
            ArtifactCount::<T>::mutate(|count| *count = count.saturating_add(1));

            Self::deposit_event(Event::ArtifactRegistered { asset_id, owner: who, cultural_value });
            Ok(())
        }

        /// 转让文物所有权，仅当前所有者可调用
        #[pallet::call_index(1)]
        #[pallet::weight(10_000)]
        pub fn transfer_artifact(
            origin: OriginFor<T>,
            asset_id: [u8; 32],
            new_owner: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let mut artifact =
                RegisteredArtifacts::<T>::get(asset_id).ok_or(Error::<T>::ArtifactNotFound)?;
            ensure!(artifact.owner == who, Error::<T>::NotOwner);

            let old_owner = artifact.owner.clone();
            artifact.owner = new_owner.clone();

            RegisteredArtifacts::<T>::insert(asset_id, &artifact);

            Self::deposit_event(Event::ArtifactTransferred { asset_id, from: old_owner, to: new_owner });
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        fn current_timestamp() -> u64 {
            <pallet_timestamp::Pallet<T>>::get().saturated_into::<u64>()
        }
    }

    impl<T: Config> ArtifactProvider<T::AccountId> for Pallet<T> {
        fn artifact_info(
            asset_id: &[u8; 32],
        ) -> Result<ArtifactInfo<T::AccountId>, ArtifactQueryError> {
            match RegisteredArtifacts::<T>::get(asset_id) {
                Some(artifact) => Ok(ArtifactInfo {
                    cultural_value: artifact.cultural_value,
                    owner: artifact.owner,
                }),
                None => Err(ArtifactQueryError::ArtifactNotFound),
            }
        }
    }
}
