//! # Access Rights Pallet
//!
//! 访问权证模块，负责文物数字资产的权证账本与动态定价：
//! - 权证余额账本（按文物+账户双键记账，余额永不为负）
//! - 动态定价引擎（单价 = alpha*文化价值 + beta*使用次数 + gamma*市场价值）
//! - 购买结算（报价、验资、计数、发证、向文物所有者转账，整体原子执行）
//! - 消费计量（每次扣减一张权证并发出消费事件，解锁动作由外部协作方完成）
//! - 市场价值预言机与定价权重治理（各由单一授权账户写入）
//!
//! 每个调用都在事务性存储层中执行：返回错误即回滚全部写入，
//! 转账失败同样回滚已记的计数与权证。

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
use alloc::vec::Vec;

pub use pallet::*;

#[cfg(test)]
mod mock;

#[frame_support::pallet]
pub mod pallet {
    use super::*;
    use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
    use frame_support::{
        pallet_prelude::*,
        traits::{Currency, ExistenceRequirement},
    };
    use frame_system::pallet_prelude::*;
    use scale_info::TypeInfo;
    use sp_runtime::{traits::SaturatedConversion, ArithmeticError, DispatchError};

    use pallet_shared_traits::ArtifactProvider;

    type BalanceOf<T> =
        <<T as Config>::Currency as Currency<<T as frame_system::Config>::AccountId>>::Balance;
    type AssetId = [u8; 32];

    /// 最低单价：1个最小货币单位，访问永不免费
    const MIN_UNIT_PRICE: u128 = 1;

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// 定价权重三元组，治理账户整体替换，所有报价读取当前值
    #[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen, DecodeWithMemTracking)]
    pub struct PricingWeights {
        pub alpha: u128,
        pub beta: u128,
        pub gamma: u128,
    }

    impl Default for PricingWeights {
        fn default() -> Self {
            Self { alpha: 1, beta: 1, gamma: 1 }
        }
    }

    /// 单件文物的访问统计
    /// `access_count` 只由成功购买累加；`market_value` 由预言机整体覆盖
    #[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen, Default, DecodeWithMemTracking)]
    pub struct AccessStats {
        pub access_count: u64,
        pub market_value: u128,
    }

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// 结算使用的货币类型
        type Currency: Currency<Self::AccountId>;

        /// 文物注册表查询接口
        type ArtifactProvider: ArtifactProvider<Self::AccountId>;

        /// 市场价值预言机账户（唯一写入者）
        #[pallet::constant]
        type MarketOracle: Get<Self::AccountId>;

        /// 定价权重治理账户
        #[pallet::constant]
        type GovernanceAuthority: Get<Self::AccountId>;

        /// 消费动作标签长度上限
        #[pallet::constant]
        type MaxActionLength: Get<u32>;
    }

    // -------------------------- 存储 --------------------------

    /// 文物访问统计，首次写入前读取为零值
    #[pallet::storage]
    #[pallet::getter(fn artifact_stats)]
    pub type ArtifactStats<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        AssetId,
        AccessStats,
        ValueQuery,
    >;

    /// 访问权证余额：(文物, 账户) -> 未消费权证数
    #[pallet::storage]
    #[pallet::getter(fn access_balance)]
    pub type AccessBalances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat, AssetId,
        Blake2_128Concat, T::AccountId,
        u64,
        ValueQuery,
    >;

    /// 当前定价权重，启动时为默认值(1, 1, 1)
    #[pallet::storage]
    #[pallet::getter(fn pricing_weights)]
    pub type CurrentPricingWeights<T: Config> = StorageValue<_, PricingWeights, ValueQuery>;

    // -------------------------- 事件 --------------------------

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// 权证购买结算完成
        AccessRightsPurchased {
            asset_id: AssetId,
            buyer: T::AccountId,
            amount: u32,
            unit_price: u128,
            total_cost: u128,
        },
        /// 一张权证被消费
        AccessConsumed { asset_id: AssetId, account: T::AccountId, action: Vec<u8> },
        /// 预言机更新市场价值
        MarketValueUpdated { asset_id: AssetId, value: u128 },
        /// 治理更新定价权重
        PricingWeightsUpdated { alpha: u128, beta: u128, gamma: u128 },
    }

    // -------------------------- 错误定义 --------------------------

    #[pallet::error]
    pub enum Error<T> {
        /// 文物不存在
        ArtifactNotFound,
        /// 提供的资金不足以支付总价
        InsufficientFunds,
        /// 访问权证余额不足
        InsufficientAccessRights,
        /// 非授权账户调用特权操作
        Unauthorized,
        /// 购买数量为零
        AmountIsZero,
        /// 消费动作标签过长
        ActionTooLong,
    }

    // -------------------------- Call（外部调用接口） --------------------------

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// 购买访问权证
        ///
        /// 单价按购买前的统计计算，买家不会被自己的购买抬价；
        /// 买家提供的全部资金（含超出总价的部分）转给文物当前所有者，不找零
        #[pallet::call_index(0)]
        #[pallet::weight(10_000)]
        pub fn purchase_access(
            origin: OriginFor<T>,
            asset_id: AssetId,
            amount: u32,
            funds_provided: BalanceOf<T>,
        ) -> DispatchResult {
            let buyer = ensure_signed(origin)?;
            ensure!(amount >= 1, Error::<T>::AmountIsZero);

            let info = T::ArtifactProvider::artifact_info(&asset_id)
                .map_err(|_| Error::<T>::ArtifactNotFound)?;

            // 1. 报价（购买前统计）
            let unit_price =
                Self::compute_unit_price(info.cultural_value, ArtifactStats::<T>::get(asset_id))?;

            // 2. 总价（检查乘法）
            let total_cost = unit_price
                .checked_mul(u128::from(amount))
                .ok_or(ArithmeticError::Overflow)?;

            // 3. 验资
            let funds: u128 = funds_provided.saturated_into();
            ensure!(funds >= total_cost, Error::<T>::InsufficientFunds);
            if funds > total_cost {
                log::warn!(
                    "权证购买超额支付: asset_id={:?}, overpaid={}",
                    asset_id,
                    funds - total_cost
                );
            }

            // 4. 累加使用统计
            ArtifactStats::<T>::try_mutate(asset_id, |stats| -> DispatchResult {
                stats.access_count = stats
                    .access_count
                    .checked_add(u64::from(amount))
                    .ok_or(ArithmeticError::Overflow)?;
                Ok(())
            })?;

            // 5. 记入权证余额
            AccessBalances::<T>::try_mutate(asset_id, &buyer, |balance| -> DispatchResult {
                *balance = balance
                    .checked_add(u64::from(amount))
                    .ok_or(ArithmeticError::Overflow)?;
                Ok(())
            })?;

            // 6. 全部资金转给当前所有者，转账失败则本次调用整体回滚
            T::Currency::transfer(
                &buyer,
                &info.owner,
                funds_provided,
                ExistenceRequirement::AllowDeath,
            )?;

            Self::deposit_event(Event::AccessRightsPurchased {
                asset_id,
                buyer,
                amount,
                unit_price,
                total_cost,
            });
            Ok(())
        }

        /// 消费一张访问权证
        ///
        /// `action` 标识被解锁的能力（如 VIEW_3D_MODEL），
        /// 解锁动作本身由订阅事件的外部协作方执行
        #[pallet::call_index(1)]
        #[pallet::weight(10_000)]
        pub fn consume_access(
            origin: OriginFor<T>,
            asset_id: AssetId,
            action: Vec<u8>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(
                action.len() <= T::MaxActionLength::get() as usize,
                Error::<T>::ActionTooLong
            );

            AccessBalances::<T>::try_mutate(asset_id, &who, |balance| -> DispatchResult {
                ensure!(*balance >= 1, Error::<T>::InsufficientAccessRights);
                *balance = balance.saturating_sub(1);
                Ok(())
            })?;

            Self::deposit_event(Event::AccessConsumed { asset_id, account: who, action });
            Ok(())
        }

        /// 预言机覆盖写入市场价值，不做数值校验，不保留历史
        #[pallet::call_index(2)]
        #[pallet::weight(10_000)]
        pub fn set_market_value(
            origin: OriginFor<T>,
            asset_id: AssetId,
            value: u128,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_authority(&who, &T::MarketOracle::get())?;

            ArtifactStats::<T>::mutate(asset_id, |stats| stats.market_value = value);

            Self::deposit_event(Event::MarketValueUpdated { asset_id, value });
            Ok(())
        }

        /// 治理整体替换定价权重三元组
        #[pallet::call_index(3)]
        #[pallet::weight(10_000)]
        pub fn set_pricing_weights(
            origin: OriginFor<T>,
            alpha: u128,
            beta: u128,
            gamma: u128,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_authority(&who, &T::GovernanceAuthority::get())?;

            CurrentPricingWeights::<T>::put(PricingWeights { alpha, beta, gamma });

            Self::deposit_event(Event::PricingWeightsUpdated { alpha, beta, gamma });
            Ok(())
        }
    }

    // -------------------------- 核心逻辑实现 --------------------------

    impl<T: Config> Pallet<T> {
        /// 特权入口守卫：调用者必须等于配置的权限账户
        fn ensure_authority(who: &T::AccountId, authority: &T::AccountId) -> DispatchResult {
            ensure!(who == authority, Error::<T>::Unauthorized);
            Ok(())
        }

        /// 查询当前单价（只读报价，结算前价格不锁定）
        pub fn quote_price(asset_id: &AssetId) -> Result<u128, DispatchError> {
            let info = T::ArtifactProvider::artifact_info(asset_id)
                .map_err(|_| Error::<T>::ArtifactNotFound)?;
            Self::compute_unit_price(info.cultural_value, ArtifactStats::<T>::get(asset_id))
        }

        /// 单价 = alpha*文化价值 + beta*使用次数 + gamma*市场价值
        ///
        /// 全程检查算术，溢出报错不回绕；结果为零时取最低单价
        fn compute_unit_price(
            cultural_value: u128,
            stats: AccessStats,
        ) -> Result<u128, DispatchError> {
            let weights = CurrentPricingWeights::<T>::get();

            let cultural_part = weights
                .alpha
                .checked_mul(cultural_value)
                .ok_or(ArithmeticError::Overflow)?;
            let usage_part = weights
                .beta
                .checked_mul(u128::from(stats.access_count))
                .ok_or(ArithmeticError::Overflow)?;
            let market_part = weights
                .gamma
                .checked_mul(stats.market_value)
                .ok_or(ArithmeticError::Overflow)?;

            let price = cultural_part
                .checked_add(usage_part)
                .and_then(|p| p.checked_add(market_part))
                .ok_or(ArithmeticError::Overflow)?;

            if price == 0 {
                Ok(MIN_UNIT_PRICE)
            } else {
                Ok(price)
            }
        }
    }
}
