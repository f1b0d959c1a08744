// 子プロセスとして動くプールワーカー

use crate::core::{
    PoolError, PoolFunctionKind, TaskRequest, TaskResponse, WorkerBackend, WorkerExit,
    WorkerSpawner,
};
use crate::process::WorkerLauncher;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout};

/// `pool-worker` 子プロセスを起動するスポナー
#[derive(Debug, Clone)]
pub struct ProcessWorkerSpawner {
    launcher: WorkerLauncher,
}

impl ProcessWorkerSpawner {
    pub fn new(launcher: WorkerLauncher) -> Self {
        Self { launcher }
    }
}

#[async_trait]
impl WorkerSpawner for ProcessWorkerSpawner {
    async fn spawn_worker(
        &self,
        worker_id: usize,
        function: PoolFunctionKind,
    ) -> Result<Box<dyn WorkerBackend>, PoolError> {
        let mut child = self
            .launcher
            .pool_worker_command(function)
            .spawn()
            .map_err(|e| PoolError::spawn(worker_id, e))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| PoolError::transport(worker_id, "stdin is not piped"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| PoolError::transport(worker_id, "stdout is not piped"))?;

        Ok(Box::new(ProcessWorkerBackend {
            worker_id,
            pid: child.id(),
            child,
            stdin: Some(stdin),
            stdout: BufReader::new(stdout).lines(),
        }))
    }
}

/// 標準入出力でJSON行をやり取りするワーカー
pub struct ProcessWorkerBackend {
    worker_id: usize,
    pid: Option<u32>,
    child: Child,
    stdin: Option<ChildStdin>,
    stdout: Lines<BufReader<ChildStdout>>,
}

impl ProcessWorkerBackend {
    /// ワーカーが応答せず終了した場合のエラー
    async fn crashed(&mut self) -> PoolError {
        self.stdin.take();
        let exit_code = self.child.wait().await.ok().and_then(|status| status.code());
        PoolError::WorkerCrashed {
            worker_id: self.worker_id,
            exit_code,
        }
    }
}

#[async_trait]
impl WorkerBackend for ProcessWorkerBackend {
    fn worker_id(&self) -> usize {
        self.worker_id
    }

    fn pid(&self) -> Option<u32> {
        self.pid
    }

    async fn execute(&mut self, request: TaskRequest) -> Result<TaskResponse, PoolError> {
        let mut encoded = serde_json::to_string(&request)?;
        encoded.push('\n');

        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| PoolError::transport(self.worker_id, "worker stdin already closed"))?;
        let written = match stdin.write_all(encoded.as_bytes()).await {
            Ok(()) => stdin.flush().await,
            Err(e) => Err(e),
        };
        if written.is_err() {
            // パイプ切断はワーカープロセスの終了を意味する
            return Err(self.crashed().await);
        }

        let line = match self.stdout.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => return Err(self.crashed().await),
            Err(e) => return Err(PoolError::transport(self.worker_id, e.to_string())),
        };

        let response: TaskResponse = serde_json::from_str(&line).map_err(|e| {
            PoolError::transport(self.worker_id, format!("invalid response: {e}"))
        })?;
        if response.index != request.index {
            return Err(PoolError::transport(
                self.worker_id,
                format!(
                    "response index {} does not match request index {}",
                    response.index, request.index
                ),
            ));
        }

        Ok(response)
    }

    async fn shutdown(&mut self) -> Result<WorkerExit, PoolError> {
        // stdinを閉じるとワーカーのサーブループがEOFで終了する
        self.stdin.take();
        let status = self
            .child
            .wait()
            .await
            .map_err(|e| PoolError::transport(self.worker_id, e.to_string()))?;

        Ok(WorkerExit {
            pid: self.pid,
            exit_code: status.code(),
        })
    }
}
