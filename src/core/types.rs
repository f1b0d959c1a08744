// デモ全体で共有するデータ構造

use serde::{Deserialize, Serialize};

/// 明示的ワーカープロセスが実行するデモタスク
#[derive(clap::ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DemoTask {
    Numbers,
    Letters,
}

impl DemoTask {
    /// ワーカーサブコマンドに渡す名前
    pub fn as_arg(&self) -> &'static str {
        match self {
            Self::Numbers => "numbers",
            Self::Letters => "letters",
        }
    }
}

/// プールワーカーが実行できる関数の種類
#[derive(clap::ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PoolFunctionKind {
    Square,
}

impl PoolFunctionKind {
    pub fn as_arg(&self) -> &'static str {
        match self {
            Self::Square => "square",
        }
    }
}

/// joinしたワーカープロセスの終了情報
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerExit {
    pub pid: Option<u32>,
    /// シグナルで終了した場合は `None`
    pub exit_code: Option<i32>,
}

impl WorkerExit {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// 親プロセスからプールワーカーへのリクエスト（1行1JSON）
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TaskRequest {
    pub index: usize,
    pub input: serde_json::Value,
}

/// ワーカー関数の実行結果
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TaskOutcome {
    Ok(serde_json::Value),
    Err(String),
}

/// プールワーカーから親プロセスへのレスポンス（1行1JSON）
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TaskResponse {
    pub index: usize,
    pub outcome: TaskOutcome,
}

/// プール実行のサマリー
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolSummary {
    pub worker_count: usize,
    pub total_tasks: usize,
    pub succeeded: usize,
    pub failed: usize,
}
