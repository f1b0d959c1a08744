// ProcessPool - ワーカープロセスのプールで純粋関数をmapする

use super::dispatcher::{spawn_consumers, spawn_producer, TaskResult};
use super::results::MapResults;
use crate::core::{
    LifecycleReporter, PoolConfig, PoolError, PoolSummary, TaskOutcome, TaskRequest,
    WorkerSpawner,
};
use crate::tasks::PoolFunction;
use tokio::sync::mpsc;

/// 固定数のワーカーを使い回してタスクを並列実行するプール
///
/// ワーカーは `map` 呼び出しごとに起動され、全タスク完了後に停止する。
pub struct ProcessPool<S, C, R> {
    spawner: S,
    config: C,
    reporter: R,
}

impl<S, C, R> ProcessPool<S, C, R>
where
    S: WorkerSpawner,
    C: PoolConfig,
    R: LifecycleReporter,
{
    pub fn new(spawner: S, config: C, reporter: R) -> Result<Self, PoolError> {
        if config.max_workers() == 0 {
            return Err(PoolError::configuration(
                "max_workers must be greater than 0",
            ));
        }
        if config.channel_buffer_size() == 0 {
            return Err(PoolError::configuration(
                "channel buffer size must be greater than 0",
            ));
        }

        Ok(Self {
            spawner,
            config,
            reporter,
        })
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// 入力の各要素に関数を適用し、入力順に結果を返す
    ///
    /// 全要素の結果が揃うまでブロックする。空の入力ではワーカーを起動しない。
    pub async fn map<F: PoolFunction>(
        &self,
        inputs: Vec<F::Input>,
    ) -> Result<MapResults<F::Output>, PoolError> {
        if inputs.is_empty() {
            return Ok(MapResults::empty());
        }

        let total_tasks = inputs.len();
        let requests = inputs
            .into_iter()
            .enumerate()
            .map(|(index, input)| {
                Ok(TaskRequest {
                    index,
                    input: serde_json::to_value(input)?,
                })
            })
            .collect::<Result<Vec<_>, PoolError>>()?;

        // ワーカー起動 - 失敗した場合は起動済みのワーカーもdropで停止する
        let worker_count = self.config.max_workers().min(total_tasks);
        let mut backends = Vec::with_capacity(worker_count);
        for worker_id in 0..worker_count {
            let backend = self.spawner.spawn_worker(worker_id, F::KIND).await?;
            self.reporter
                .report_worker_started(&worker_label(worker_id), backend.pid())
                .await;
            backends.push(backend);
        }
        self.reporter
            .report_pool_started(worker_count, total_tasks)
            .await;

        let buffer_size = self.config.channel_buffer_size();
        let (work_tx, work_rx) = mpsc::channel::<TaskRequest>(buffer_size);
        let (result_tx, mut result_rx) = mpsc::channel::<TaskResult>(buffer_size);

        let producer_handle = spawn_producer(requests, work_tx);
        let consumer_handles = spawn_consumers(backends, work_rx, result_tx);

        // 結果を入力位置に格納（完了順は問わない）
        let mut slots: Vec<Option<Result<TaskOutcome, PoolError>>> =
            (0..total_tasks).map(|_| None).collect();
        while let Some((index, result)) = result_rx.recv().await {
            if let Some(slot) = slots.get_mut(index) {
                *slot = Some(result);
            }
        }

        producer_handle.await?;
        for (worker_id, handle) in consumer_handles {
            let exit = handle.await??;
            self.reporter
                .report_worker_exited(&worker_label(worker_id), exit)
                .await;
        }

        let mut results = Vec::with_capacity(total_tasks);
        for (index, slot) in slots.into_iter().enumerate() {
            let result = decode_slot::<F>(index, slot);
            if let Err(error) = &result {
                self.reporter
                    .report_task_failed(index, &error.to_string())
                    .await;
            }
            results.push(result);
        }

        let failed = results.iter().filter(|result| result.is_err()).count();
        let summary = PoolSummary {
            worker_count,
            total_tasks,
            succeeded: total_tasks - failed,
            failed,
        };
        self.reporter
            .report_pool_completed(summary.succeeded, summary.failed)
            .await;

        Ok(MapResults::new(results, summary))
    }
}

fn worker_label(worker_id: usize) -> String {
    format!("pool-worker-{worker_id}")
}

fn decode_slot<F: PoolFunction>(
    index: usize,
    slot: Option<Result<TaskOutcome, PoolError>>,
) -> Result<F::Output, PoolError> {
    match slot {
        None => Err(PoolError::Unfinished { index }),
        Some(Err(error)) => Err(error),
        Some(Ok(TaskOutcome::Err(message))) => Err(PoolError::task(index, message)),
        Some(Ok(TaskOutcome::Ok(value))) => Ok(serde_json::from_value(value)?),
    }
}
