// 実プロセスを使ったプールmapの統合テスト
use super::binary_path;
use process_demos::core::PoolError;
use process_demos::pool::{DefaultPoolConfig, ProcessPool, ProcessWorkerSpawner};
use process_demos::process::WorkerLauncher;
use process_demos::reporting::NoOpLifecycleReporter;
use process_demos::tasks::Square;

fn process_pool(
    max_workers: usize,
) -> ProcessPool<ProcessWorkerSpawner, DefaultPoolConfig, NoOpLifecycleReporter> {
    ProcessPool::new(
        ProcessWorkerSpawner::new(WorkerLauncher::new(binary_path())),
        DefaultPoolConfig::new(max_workers),
        NoOpLifecycleReporter::new(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_process_pool_squares_in_order() {
    let pool = process_pool(num_cpus::get());

    let results = pool.map::<Square>(vec![1, 2, 3, 4, 5]).await.unwrap();
    assert_eq!(results.into_vec().unwrap(), vec![1, 4, 9, 16, 25]);
}

#[tokio::test]
async fn test_process_pool_single_input() {
    let pool = process_pool(4);

    let results = pool.map::<Square>(vec![2]).await.unwrap();
    assert_eq!(results.summary().worker_count, 1);
    assert_eq!(results.into_vec().unwrap(), vec![4]);
}

#[tokio::test]
async fn test_process_pool_empty_input() {
    let pool = process_pool(4);

    let results = pool.map::<Square>(Vec::new()).await.unwrap();
    assert_eq!(results.summary().worker_count, 0);
    assert!(results.into_vec().unwrap().is_empty());
}

#[tokio::test]
async fn test_process_pool_many_inputs_few_workers() {
    let pool = process_pool(2);
    let inputs: Vec<i64> = (-50..50).collect();
    let expected: Vec<i64> = inputs.iter().map(|n| n * n).collect();

    let results = pool.map::<Square>(inputs).await.unwrap();
    assert_eq!(results.summary().worker_count, 2);
    assert_eq!(results.into_vec().unwrap(), expected);
}

#[tokio::test]
async fn test_process_pool_error_at_consumption_point() {
    let pool = process_pool(2);

    let mut results = pool
        .map::<Square>(vec![1, i64::MAX, 3])
        .await
        .unwrap();

    assert_eq!(results.next().unwrap().unwrap(), 1);
    assert!(matches!(
        results.next().unwrap(),
        Err(PoolError::Task { index: 1, .. })
    ));
    assert_eq!(results.next().unwrap().unwrap(), 9);
}
