// プロセス層 - OSプロセスの起動とjoin

pub mod launcher;
pub mod worker_process;

// 公開API
pub use launcher::WorkerLauncher;
pub use worker_process::WorkerProcess;
