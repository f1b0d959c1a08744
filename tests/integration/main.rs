// 統合テスト - 実際のバイナリをワーカーとして起動する

mod test_cli;
mod test_dual_process;
mod test_pool_map;

use std::path::PathBuf;

/// テスト対象のバイナリ
pub fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_process_demos"))
}
