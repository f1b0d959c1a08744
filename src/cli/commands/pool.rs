use crate::pool::{DefaultPoolConfig, ProcessPool, ProcessWorkerSpawner};
use crate::process::WorkerLauncher;
use crate::reporting::reporter_for;
use crate::tasks::Square;
use anyhow::{Context, Result};

/// ワーカープロセスのプールで入力を二乗し、入力順の結果を出力
pub async fn execute_pool(
    inputs: Vec<i64>,
    max_workers: Option<usize>,
    verbose: bool,
) -> Result<()> {
    let mut config = DefaultPoolConfig::default();
    if let Some(max_workers) = max_workers {
        config = config.with_max_workers(max_workers);
    }

    let spawner = ProcessWorkerSpawner::new(WorkerLauncher::current_exe()?);
    let pool = ProcessPool::new(spawner, config, reporter_for(verbose))?;

    let results = pool
        .map::<Square>(inputs)
        .await?
        .into_vec()
        .context("プールでの二乗計算に失敗しました")?;

    println!("{results:?}");
    Ok(())
}
