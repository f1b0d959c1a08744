use super::registry::PoolFunction;
use crate::core::PoolFunctionKind;

/// 整数の二乗（オーバーフローはタスクエラー）
#[derive(Debug, Clone, Copy, Default)]
pub struct Square;

impl PoolFunction for Square {
    const KIND: PoolFunctionKind = PoolFunctionKind::Square;
    type Input = i64;
    type Output = i64;

    fn call(input: i64) -> Result<i64, String> {
        input
            .checked_mul(input)
            .ok_or_else(|| format!("integer overflow while squaring {input}"))
    }
}
