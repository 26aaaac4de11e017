#![cfg_attr(not(feature = "std"), no_std)]

use codec::{Decode, Encode};
use scale_info::TypeInfo;

#[derive(Debug, PartialEq, Eq, Encode, Decode)]
pub enum ArtifactQueryError {
    ArtifactNotFound,
}

/// 文物查询结果：定价与结算需要的两项注册表数据
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug, TypeInfo)]
pub struct ArtifactInfo<AccountId> {
    pub cultural_value: u128,
    pub owner: AccountId,
}

/// 文物注册表提供者Trait - access_rights模块调用
pub trait ArtifactProvider<AccountId> {
    /// 查询文物的创建时文化价值与当前所有者
    fn artifact_info(asset_id: &[u8; 32]) -> Result<ArtifactInfo<AccountId>, ArtifactQueryError>;
}
