// プロセスを起動せず、同じ関数レジストリをtokioタスク上で実行するワーカー
// テストとベンチマーク用

use crate::core::{
    PoolError, PoolFunctionKind, TaskRequest, TaskResponse, WorkerBackend, WorkerExit,
    WorkerSpawner,
};
use crate::tasks::apply;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

type DelayFn = Arc<dyn Fn(&TaskRequest) -> Duration + Send + Sync>;

/// インプロセスワーカーのスポナー
#[derive(Clone, Default)]
pub struct InProcessSpawner {
    delay: Option<DelayFn>,
    spawned: Arc<AtomicUsize>,
}

impl InProcessSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// タスクごとの人工的な処理時間を設定（完了順を入れ替える用途）
    pub fn with_delay<F>(mut self, delay: F) -> Self
    where
        F: Fn(&TaskRequest) -> Duration + Send + Sync + 'static,
    {
        self.delay = Some(Arc::new(delay));
        self
    }

    /// これまでに起動したワーカー数
    pub fn spawned_count(&self) -> usize {
        self.spawned.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl WorkerSpawner for InProcessSpawner {
    async fn spawn_worker(
        &self,
        worker_id: usize,
        function: PoolFunctionKind,
    ) -> Result<Box<dyn WorkerBackend>, PoolError> {
        self.spawned.fetch_add(1, Ordering::Relaxed);
        Ok(Box::new(InProcessWorker {
            worker_id,
            function,
            delay: self.delay.clone(),
        }))
    }
}

struct InProcessWorker {
    worker_id: usize,
    function: PoolFunctionKind,
    delay: Option<DelayFn>,
}

#[async_trait]
impl WorkerBackend for InProcessWorker {
    fn worker_id(&self) -> usize {
        self.worker_id
    }

    fn pid(&self) -> Option<u32> {
        None
    }

    async fn execute(&mut self, request: TaskRequest) -> Result<TaskResponse, PoolError> {
        if let Some(delay) = &self.delay {
            tokio::time::sleep(delay(&request)).await;
        }

        let function = self.function;
        let TaskRequest { index, input } = request;
        let outcome = tokio::task::spawn_blocking(move || apply(function, input)).await?;

        Ok(TaskResponse { index, outcome })
    }

    async fn shutdown(&mut self) -> Result<WorkerExit, PoolError> {
        Ok(WorkerExit {
            pid: None,
            exit_code: Some(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TaskOutcome;
    use serde_json::json;

    #[tokio::test]
    async fn test_in_process_worker_executes() {
        let spawner = InProcessSpawner::new();
        let mut worker = spawner
            .spawn_worker(0, PoolFunctionKind::Square)
            .await
            .unwrap();

        let response = worker
            .execute(TaskRequest {
                index: 7,
                input: json!(6),
            })
            .await
            .unwrap();

        assert_eq!(response.index, 7);
        assert_eq!(response.outcome, TaskOutcome::Ok(json!(36)));
        assert!(worker.pid().is_none());
        assert!(worker.shutdown().await.unwrap().success());
        assert_eq!(spawner.spawned_count(), 1);
    }
}
