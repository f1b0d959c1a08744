// ライフサイクル報告の具象実装
// 標準出力はデモの出力専用なので、報告はすべて標準エラーに書く

use crate::core::{LifecycleReporter, WorkerExit};
use async_trait::async_trait;

/// 標準エラーへのコンソール報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleLifecycleReporter {
    quiet: bool,
}

impl ConsoleLifecycleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    fn emit(&self, message: &str) {
        if !self.quiet {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            eprintln!("[{now}] {message}");
        }
    }
}

#[async_trait]
impl LifecycleReporter for ConsoleLifecycleReporter {
    async fn report_worker_started(&self, label: &str, pid: Option<u32>) {
        match pid {
            Some(pid) => self.emit(&format!("🚀 {label} started (pid {pid})")),
            None => self.emit(&format!("🚀 {label} started")),
        }
    }

    async fn report_worker_exited(&self, label: &str, exit: WorkerExit) {
        if exit.success() {
            self.emit(&format!("✅ {label} exited"));
        } else {
            self.emit(&format!(
                "⚠️  {label} exited with code {:?}",
                exit.exit_code
            ));
        }
    }

    async fn report_pool_started(&self, worker_count: usize, total_tasks: usize) {
        self.emit(&format!(
            "⚙️  Pool started: {worker_count} workers, {total_tasks} tasks"
        ));
    }

    async fn report_task_failed(&self, index: usize, error: &str) {
        self.emit(&format!("❌ Task {index} failed: {error}"));
    }

    async fn report_pool_completed(&self, succeeded: usize, failed: usize) {
        self.emit(&format!(
            "📊 Pool completed! Succeeded: {succeeded}, Failed: {failed}"
        ));
    }
}

/// 何もしない報告実装（デフォルト・テスト用）
#[derive(Debug, Default, Clone)]
pub struct NoOpLifecycleReporter;

impl NoOpLifecycleReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LifecycleReporter for NoOpLifecycleReporter {
    async fn report_worker_started(&self, _label: &str, _pid: Option<u32>) {}

    async fn report_worker_exited(&self, _label: &str, _exit: WorkerExit) {}

    async fn report_pool_started(&self, _worker_count: usize, _total_tasks: usize) {}

    async fn report_task_failed(&self, _index: usize, _error: &str) {}

    async fn report_pool_completed(&self, _succeeded: usize, _failed: usize) {}
}

/// `--verbose` の有無から報告実装を選ぶ
pub fn reporter_for(verbose: bool) -> Box<dyn LifecycleReporter> {
    if verbose {
        Box::new(ConsoleLifecycleReporter::new())
    } else {
        Box::new(NoOpLifecycleReporter::new())
    }
}
