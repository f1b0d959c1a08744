// プロセス並列デモ専用のカスタムエラー型定義

use thiserror::Error;

/// 明示的なワーカープロセス（デュアルプロセスデモ）のエラー型
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("ワーカープロセス起動エラー: {label} - {source}")]
    Spawn {
        label: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ワーカープロセスは既に起動済みです: {label} (pid: {pid:?})")]
    AlreadyStarted { label: String, pid: Option<u32> },

    #[error("起動していないワーカープロセスはjoinできません: {label}")]
    NotStarted { label: String },

    #[error("ワーカープロセス待機エラー: {label} - {source}")]
    Wait {
        label: String,
        #[source]
        source: std::io::Error,
    },

    #[error("実行ファイルの特定に失敗しました: {source}")]
    ExecutableNotFound {
        #[source]
        source: std::io::Error,
    },
}

impl ProcessError {
    /// 起動エラーの作成
    pub fn spawn(label: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            label: label.into(),
            source,
        }
    }

    /// 二重起動エラーの作成
    pub fn already_started(label: impl Into<String>, pid: Option<u32>) -> Self {
        Self::AlreadyStarted {
            label: label.into(),
            pid,
        }
    }

    /// 未起動joinエラーの作成
    pub fn not_started(label: impl Into<String>) -> Self {
        Self::NotStarted {
            label: label.into(),
        }
    }

    /// 待機エラーの作成
    pub fn wait(label: impl Into<String>, source: std::io::Error) -> Self {
        Self::Wait {
            label: label.into(),
            source,
        }
    }

    /// 呼び出し側の使い方の誤りかどうか（環境起因ではない）
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::AlreadyStarted { .. } | Self::NotStarted { .. })
    }
}

/// プロセスプール固有のエラー型
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("設定エラー: {message}")]
    Configuration { message: String },

    #[error("ワーカー{worker_id}の起動エラー: {source}")]
    Spawn {
        worker_id: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("ワーカー{worker_id}との通信エラー: {message}")]
    Transport { worker_id: usize, message: String },

    #[error("ワーカー{worker_id}が処理中に終了しました (exit code: {exit_code:?})")]
    WorkerCrashed {
        worker_id: usize,
        exit_code: Option<i32>,
    },

    #[error("タスク{index}の実行エラー: {message}")]
    Task { index: usize, message: String },

    #[error("シリアライズエラー: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("チャンネルエラー: {message}")]
    Channel { message: String },

    #[error("タスク待機エラー: {source}")]
    TaskJoin {
        #[from]
        source: tokio::task::JoinError,
    },

    #[error("タスク{index}は実行されませんでした（利用可能なワーカーがありません）")]
    Unfinished { index: usize },
}

impl PoolError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// ワーカー起動エラーの作成
    pub fn spawn(worker_id: usize, source: std::io::Error) -> Self {
        Self::Spawn { worker_id, source }
    }

    /// 通信エラーの作成
    pub fn transport(worker_id: usize, message: impl Into<String>) -> Self {
        Self::Transport {
            worker_id,
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(index: usize, message: impl Into<String>) -> Self {
        Self::Task {
            index,
            message: message.into(),
        }
    }

    /// チャンネルエラーの作成
    pub fn channel(message: impl Into<String>) -> Self {
        Self::Channel {
            message: message.into(),
        }
    }

    /// ワーカープロセス自体が使えなくなったエラーかどうか
    ///
    /// `true` の場合、そのワーカーは以降のタスクを受け付けない。
    pub fn is_worker_fatal(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::WorkerCrashed { .. } | Self::Spawn { .. }
        )
    }
}
