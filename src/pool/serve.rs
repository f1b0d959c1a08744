// プールワーカー側のサーブループ
// 標準入力からリクエスト行を読み、関数を適用して標準出力へレスポンス行を書く

use crate::core::{PoolFunctionKind, TaskRequest, TaskResponse};
use crate::tasks::apply;
use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// 入力がEOFになるまでリクエストを処理し、処理件数を返す
pub async fn serve<R, W>(function: PoolFunctionKind, reader: R, mut writer: W) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut handled = 0;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let request: TaskRequest =
            serde_json::from_str(&line).with_context(|| format!("invalid task request: {line}"))?;
        let response = TaskResponse {
            index: request.index,
            outcome: apply(function, request.input),
        };

        let mut encoded = serde_json::to_string(&response)?;
        encoded.push('\n');
        writer.write_all(encoded.as_bytes()).await?;
        // 親はレスポンスを1行ずつ待つので毎回flushする
        writer.flush().await?;
        handled += 1;
    }

    Ok(handled)
}
