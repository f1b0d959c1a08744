// Producer-Consumer によるタスク配信
// 空いているワーカーが次のタスクを取る

use crate::core::{PoolError, TaskOutcome, TaskRequest, WorkerBackend, WorkerExit};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

/// 入力位置とそのタスクの結果
pub type TaskResult = (usize, Result<TaskOutcome, PoolError>);

/// Producer: リクエストを配信
pub fn spawn_producer(
    requests: Vec<TaskRequest>,
    work_tx: mpsc::Sender<TaskRequest>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        for request in requests {
            if work_tx.send(request).await.is_err() {
                // 全ワーカーが停止した場合は残りを配信しない
                break;
            }
        }
    })
}

/// 単一Consumerワーカー
///
/// ワーカー自体が使えなくなるエラーの後はタスクを取らず、停止処理に進む。
pub fn spawn_single_consumer(
    mut backend: Box<dyn WorkerBackend>,
    work_rx: Arc<Mutex<mpsc::Receiver<TaskRequest>>>,
    result_tx: mpsc::Sender<TaskResult>,
) -> JoinHandle<Result<WorkerExit, PoolError>> {
    tokio::spawn(async move {
        loop {
            let request = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(request) => request,
                    None => break,
                }
            };

            let index = request.index;
            let (result, fatal) = match backend.execute(request).await {
                Ok(response) => (Ok(response.outcome), false),
                Err(error) => {
                    let fatal = error.is_worker_fatal();
                    (Err(error), fatal)
                }
            };

            if result_tx.send((index, result)).await.is_err() || fatal {
                break;
            }
        }

        backend.shutdown().await
    })
}

/// Consumers: ワーカーごとに1つのConsumerを起動
pub fn spawn_consumers(
    backends: Vec<Box<dyn WorkerBackend>>,
    work_rx: mpsc::Receiver<TaskRequest>,
    result_tx: mpsc::Sender<TaskResult>,
) -> Vec<(usize, JoinHandle<Result<WorkerExit, PoolError>>)> {
    let work_rx = Arc::new(Mutex::new(work_rx));

    backends
        .into_iter()
        .map(|backend| {
            let worker_id = backend.worker_id();
            let handle = spawn_single_consumer(backend, work_rx.clone(), result_tx.clone());
            (worker_id, handle)
        })
        .collect()
}
