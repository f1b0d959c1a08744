// 隠しサブコマンド - 親プロセスから起動されるワーカー側の処理

use crate::core::{DemoTask, PoolFunctionKind};
use crate::pool::serve;
use crate::tasks::render_task_line;
use anyhow::Result;
use tokio::io::BufReader;

/// デュアルデモのワーカー: 自身のプロセスIDとタスクの内容を1行出力
pub fn execute_worker(task: DemoTask) -> Result<()> {
    println!("{}", render_task_line(task, std::process::id()));
    Ok(())
}

/// プールワーカー: 標準入力が閉じられるまでタスクを処理
pub async fn execute_pool_worker(function: PoolFunctionKind) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    serve(function, stdin, tokio::io::stdout()).await?;
    Ok(())
}
