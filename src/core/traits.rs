// デモシステムのトレイト定義
// 全ての抽象化インターフェースを定義

use super::error::PoolError;
use super::types::{PoolFunctionKind, TaskRequest, TaskResponse, WorkerExit};
use async_trait::async_trait;
use mockall::automock;

/// プロセスプールの設定を抽象化するトレイト
#[automock]
pub trait PoolConfig: Send + Sync {
    /// 最大ワーカープロセス数を取得
    fn max_workers(&self) -> usize;

    /// タスクチャンネルのバッファサイズを取得
    fn channel_buffer_size(&self) -> usize;
}

// PoolConfig for Box<dyn PoolConfig>
impl PoolConfig for Box<dyn PoolConfig> {
    fn max_workers(&self) -> usize {
        self.as_ref().max_workers()
    }

    fn channel_buffer_size(&self) -> usize {
        self.as_ref().channel_buffer_size()
    }
}

/// ワーカーのライフサイクル報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait LifecycleReporter: Send + Sync {
    /// ワーカープロセス起動時の報告
    async fn report_worker_started(&self, label: &str, pid: Option<u32>);

    /// ワーカープロセス終了時の報告
    async fn report_worker_exited(&self, label: &str, exit: WorkerExit);

    /// プール処理開始時の報告
    async fn report_pool_started(&self, worker_count: usize, total_tasks: usize);

    /// タスク失敗時の報告
    async fn report_task_failed(&self, index: usize, error: &str);

    /// プール処理完了時の報告
    async fn report_pool_completed(&self, succeeded: usize, failed: usize);
}

// LifecycleReporter for Box<dyn LifecycleReporter>
#[async_trait]
impl LifecycleReporter for Box<dyn LifecycleReporter> {
    async fn report_worker_started(&self, label: &str, pid: Option<u32>) {
        self.as_ref().report_worker_started(label, pid).await
    }

    async fn report_worker_exited(&self, label: &str, exit: WorkerExit) {
        self.as_ref().report_worker_exited(label, exit).await
    }

    async fn report_pool_started(&self, worker_count: usize, total_tasks: usize) {
        self.as_ref()
            .report_pool_started(worker_count, total_tasks)
            .await
    }

    async fn report_task_failed(&self, index: usize, error: &str) {
        self.as_ref().report_task_failed(index, error).await
    }

    async fn report_pool_completed(&self, succeeded: usize, failed: usize) {
        self.as_ref().report_pool_completed(succeeded, failed).await
    }
}

/// プール内の1ワーカーとの対話を抽象化するトレイト
#[automock]
#[async_trait]
pub trait WorkerBackend: Send {
    /// ワーカーの識別子
    fn worker_id(&self) -> usize;

    /// OSプロセスID（インプロセス実装では `None`）
    fn pid(&self) -> Option<u32>;

    /// 1タスクを実行してレスポンスを受け取る
    async fn execute(&mut self, request: TaskRequest) -> Result<TaskResponse, PoolError>;

    /// ワーカーを停止し、終了を待機する
    async fn shutdown(&mut self) -> Result<WorkerExit, PoolError>;
}

/// ワーカーの起動を抽象化するトレイト
#[async_trait]
pub trait WorkerSpawner: Send + Sync {
    /// 指定した関数を実行するワーカーを1つ起動
    async fn spawn_worker(
        &self,
        worker_id: usize,
        function: PoolFunctionKind,
    ) -> Result<Box<dyn WorkerBackend>, PoolError>;
}
