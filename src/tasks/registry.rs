// プール関数の登録と名前による実行

use super::square::Square;
use crate::core::{PoolFunctionKind, TaskOutcome};
use serde::{de::DeserializeOwned, Serialize};

/// プールワーカーで実行できる純粋関数
///
/// 入出力はJSONでプロセス境界を越えるため、serdeで表現できる型に限る。
pub trait PoolFunction: Send + Sync + 'static {
    const KIND: PoolFunctionKind;
    type Input: Serialize + DeserializeOwned + Send + 'static;
    type Output: Serialize + DeserializeOwned + Send + 'static;

    fn call(input: Self::Input) -> Result<Self::Output, String>;
}

/// JSON値に関数を適用
pub fn apply(kind: PoolFunctionKind, input: serde_json::Value) -> TaskOutcome {
    match kind {
        PoolFunctionKind::Square => apply_typed::<Square>(input),
    }
}

fn apply_typed<F: PoolFunction>(input: serde_json::Value) -> TaskOutcome {
    let input: F::Input = match serde_json::from_value(input) {
        Ok(value) => value,
        Err(e) => return TaskOutcome::Err(format!("invalid input: {e}")),
    };

    match F::call(input).map(serde_json::to_value) {
        Ok(Ok(value)) => TaskOutcome::Ok(value),
        Ok(Err(e)) => TaskOutcome::Err(format!("invalid output: {e}")),
        Err(message) => TaskOutcome::Err(message),
    }
}
