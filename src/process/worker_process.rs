// WorkerProcess - 明示的に起動・joinするワーカープロセス

use crate::core::{ProcessError, WorkerExit};
use std::process::ExitStatus;
use tokio::process::{Child, Command};

enum WorkerState {
    Created,
    Running(Child),
    Exited(WorkerExit),
}

/// 1つの関数を実行して終了するOSプロセス
///
/// joinは終了コードを返すだけで、ワーカー側の失敗をエラーとして伝播しない。
/// 失敗は `WorkerExit::exit_code` で観測する。
pub struct WorkerProcess {
    label: String,
    command: Command,
    pid: Option<u32>,
    state: WorkerState,
}

impl WorkerProcess {
    pub fn new(label: impl Into<String>, command: Command) -> Self {
        Self {
            label: label.into(),
            command,
            pid: None,
            state: WorkerState::Created,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// 起動後のプロセスID
    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    /// プロセスを起動
    pub fn start(&mut self) -> Result<(), ProcessError> {
        if !matches!(self.state, WorkerState::Created) {
            return Err(ProcessError::already_started(&self.label, self.pid));
        }

        let child = self
            .command
            .spawn()
            .map_err(|e| ProcessError::spawn(&self.label, e))?;
        self.pid = child.id();
        self.state = WorkerState::Running(child);
        Ok(())
    }

    /// 起動済みかつ終了が観測されていない間だけ `true`
    pub fn is_alive(&mut self) -> bool {
        let status = match &mut self.state {
            WorkerState::Running(child) => match child.try_wait() {
                Ok(None) => return true,
                Ok(Some(status)) => status,
                Err(_) => return false,
            },
            _ => return false,
        };
        self.state = WorkerState::Exited(self.exit_from(status));
        false
    }

    /// プロセスの終了を待機
    pub async fn join(&mut self) -> Result<WorkerExit, ProcessError> {
        let status = match &mut self.state {
            WorkerState::Created => return Err(ProcessError::not_started(&self.label)),
            WorkerState::Exited(exit) => return Ok(*exit),
            WorkerState::Running(child) => child
                .wait()
                .await
                .map_err(|e| ProcessError::wait(&self.label, e))?,
        };

        let exit = self.exit_from(status);
        self.state = WorkerState::Exited(exit);
        Ok(exit)
    }

    /// 終了済みの場合の終了情報
    pub fn exit(&self) -> Option<WorkerExit> {
        match self.state {
            WorkerState::Exited(exit) => Some(exit),
            _ => None,
        }
    }

    fn exit_from(&self, status: ExitStatus) -> WorkerExit {
        WorkerExit {
            pid: self.pid,
            exit_code: status.code(),
        }
    }
}

impl std::fmt::Debug for WorkerProcess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerProcess")
            .field("label", &self.label)
            .field("pid", &self.pid)
            .field("exit", &self.exit())
            .finish()
    }
}
