// デュアルプロセスデモ - 2つのワーカープロセスを起動してjoinする

use crate::core::{DemoTask, LifecycleReporter, ProcessError, WorkerExit};
use crate::process::{WorkerLauncher, WorkerProcess};

/// 完了メッセージ（両ワーカーのjoin後にのみ出力する）
pub const FINISHED_MESSAGE: &str = "Both processes have finished execution.";

/// 実行後のワーカー
#[derive(Debug)]
pub struct DualRunReport {
    pub workers: Vec<WorkerProcess>,
}

impl DualRunReport {
    /// 各ワーカーの終了情報
    pub fn exits(&self) -> Vec<WorkerExit> {
        self.workers.iter().filter_map(WorkerProcess::exit).collect()
    }

    pub fn all_succeeded(&self) -> bool {
        let exits = self.exits();
        exits.len() == self.workers.len() && exits.iter().all(WorkerExit::success)
    }
}

pub struct DualProcessDemo<R> {
    launcher: WorkerLauncher,
    reporter: R,
}

impl<R: LifecycleReporter> DualProcessDemo<R> {
    pub fn new(launcher: WorkerLauncher, reporter: R) -> Self {
        Self { launcher, reporter }
    }

    /// 両ワーカーを起動してから、両方の終了を待つ
    ///
    /// ワーカーが非ゼロで終了してもエラーにはならない。
    pub async fn run(&self) -> Result<DualRunReport, ProcessError> {
        let mut workers: Vec<WorkerProcess> = [DemoTask::Numbers, DemoTask::Letters]
            .into_iter()
            .map(|task| WorkerProcess::new(task.as_arg(), self.launcher.demo_command(task)))
            .collect();

        for worker in workers.iter_mut() {
            worker.start()?;
            self.reporter
                .report_worker_started(worker.label(), worker.pid())
                .await;
        }

        for worker in workers.iter_mut() {
            let exit = worker.join().await?;
            self.reporter
                .report_worker_exited(worker.label(), exit)
                .await;
        }

        Ok(DualRunReport { workers })
    }
}
