// プロセスプール
//
// 親側: ProcessPool が dispatcher でタスクを配信し、結果を入力順に並べる
// ワーカー側: serve が標準入出力でリクエストを処理する

pub mod config;
pub mod dispatcher;
pub mod in_process;
pub mod process_backend;
pub mod process_pool;
pub mod results;
pub mod serve;

// 公開API
pub use config::DefaultPoolConfig;
pub use in_process::InProcessSpawner;
pub use process_backend::{ProcessWorkerBackend, ProcessWorkerSpawner};
pub use process_pool::ProcessPool;
pub use results::MapResults;
pub use serve::serve;
