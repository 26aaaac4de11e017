use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{traits::ConstU32, BoundedVec};
use scale_info::TypeInfo;
use sp_std::vec::Vec;

/// Cultural Artifact Record
///
/// `cultural_value`、`creator`、`created_at` 在登记后不可变更，
/// 只有 `owner` 可以通过转让变化
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug, TypeInfo, MaxEncodedLen, DecodeWithMemTracking)]
pub struct Artifact<AccountId> {
    // Creation-time valuation, fixed forever
    pub cultural_value: u128,

    // Provenance
    pub creator: AccountId,
    pub created_at: u64,

    // Ownership (mutable through transfer only)
    pub owner: AccountId,

    // Basic information
    pub name: BoundedVec<u8, ConstU32<128>>,
    pub metadata_cid: BoundedVec<u8, ConstU32<128>>,
}

impl<AccountId: Encode> Artifact<AccountId> {
    /// Generate artifact ID from creator, timestamp, and name
    pub fn generate_artifact_id(creator: &AccountId, timestamp: u64, name: &[u8]) -> [u8; 32] {
        use sp_io::hashing::blake2_256;

        let mut input = Vec::new();
        input.extend_from_slice(&creator.encode());
        input.extend_from_slice(&timestamp.to_le_bytes());
        input.extend_from_slice(name);

        blake2_256(&input)
    }
}
