// ワーカーが実行する関数群
// デュアルプロセスデモのタスクと、プールで実行する純粋関数

pub mod registry;
pub mod square;

use crate::core::DemoTask;

pub use registry::{apply, PoolFunction};
pub use square::Square;

/// 0から4までの数値
pub fn numbers() -> Vec<u32> {
    (0..5).collect()
}

/// AからEまでの文字
pub fn letters() -> Vec<char> {
    "ABCDE".chars().collect()
}

/// ワーカープロセスが出力する1行を組み立てる
pub fn render_task_line(task: DemoTask, pid: u32) -> String {
    match task {
        DemoTask::Numbers => format!("Process ID: {pid} - Numbers: {:?}", numbers()),
        DemoTask::Letters => format!("Process ID: {pid} - Letters: {:?}", letters()),
    }
}
