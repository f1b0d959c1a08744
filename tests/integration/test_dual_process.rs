// デュアルプロセスデモの統合テスト
use super::binary_path;
use process_demos::core::DemoTask;
use process_demos::demos::DualProcessDemo;
use process_demos::process::{WorkerLauncher, WorkerProcess};
use process_demos::reporting::NoOpLifecycleReporter;

#[tokio::test]
async fn test_both_workers_terminate_after_run() {
    let demo = DualProcessDemo::new(
        WorkerLauncher::new(binary_path()),
        NoOpLifecycleReporter::new(),
    );

    let mut report = demo.run().await.unwrap();

    assert!(report.all_succeeded());
    for worker in report.workers.iter_mut() {
        assert!(!worker.is_alive());
        assert!(worker.pid().is_some());
    }
}

#[tokio::test]
async fn test_worker_pid_differs_from_parent() {
    let launcher = WorkerLauncher::new(binary_path());
    let mut worker = WorkerProcess::new("numbers", launcher.demo_command(DemoTask::Numbers));

    worker.start().unwrap();
    let pid = worker.pid().unwrap();
    let exit = worker.join().await.unwrap();

    assert_ne!(pid, std::process::id());
    assert_eq!(exit.pid, Some(pid));
    assert!(exit.success());
}
