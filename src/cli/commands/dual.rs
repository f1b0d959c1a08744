use crate::demos::{DualProcessDemo, FINISHED_MESSAGE};
use crate::process::WorkerLauncher;
use crate::reporting::reporter_for;
use anyhow::Result;

/// 2つのワーカープロセスを起動し、両方の終了後に完了メッセージを出力
pub async fn execute_dual(verbose: bool) -> Result<()> {
    let launcher = WorkerLauncher::current_exe()?;
    let demo = DualProcessDemo::new(launcher, reporter_for(verbose));

    demo.run().await?;

    println!("{FINISHED_MESSAGE}");
    Ok(())
}
