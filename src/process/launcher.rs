// ワーカープロセス用コマンドの組み立て
// 同じ実行ファイルを隠しサブコマンド付きで再起動する

use crate::core::{DemoTask, PoolFunctionKind, ProcessError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// ワーカーを起動する実行ファイルの情報
#[derive(Debug, Clone)]
pub struct WorkerLauncher {
    program: PathBuf,
    /// サブコマンドの前に渡す引数（インタプリタ経由の起動用）
    prefix_args: Vec<OsString>,
}

impl WorkerLauncher {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            prefix_args: Vec::new(),
        }
    }

    /// 現在実行中のバイナリ自身をワーカーとして使う
    pub fn current_exe() -> Result<Self, ProcessError> {
        let program = std::env::current_exe()
            .map_err(|source| ProcessError::ExecutableNotFound { source })?;
        Ok(Self::new(program))
    }

    pub fn with_prefix_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.prefix_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn base_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.prefix_args);
        command
    }

    /// `worker <task>` コマンド
    ///
    /// 標準出力は親から継承するので、各ワーカーの出力はそのままコンソールに出る。
    pub fn demo_command(&self, task: DemoTask) -> Command {
        let mut command = self.base_command();
        command
            .arg("worker")
            .arg(task.as_arg())
            .stdin(Stdio::null());
        command
    }

    /// `pool-worker <function>` コマンド（標準入出力でJSON行をやり取り）
    pub fn pool_worker_command(&self, function: PoolFunctionKind) -> Command {
        let mut command = self.base_command();
        command
            .arg("pool-worker")
            .arg(function.as_arg())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);
        command
    }
}
