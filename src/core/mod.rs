// コア層 - 型定義・トレイト・エラー
// デモ全体で共有する抽象化

pub mod error;
pub mod traits;
pub mod types;

// 公開API
pub use error::{PoolError, ProcessError};
pub use traits::{LifecycleReporter, PoolConfig, WorkerBackend, WorkerSpawner};
pub use types::*;
