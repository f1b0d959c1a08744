// デモ層 - 2つの独立したデモの実行

pub mod dual;

pub use dual::{DualProcessDemo, DualRunReport, FINISHED_MESSAGE};

/// プールmapデモのデフォルト入力
pub const DEFAULT_POOL_INPUTS: [i64; 5] = [1, 2, 3, 4, 5];
