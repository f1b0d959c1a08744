// プール設定の具象実装

use crate::core::PoolConfig;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultPoolConfig {
    max_workers: usize,
    buffer_size: usize,
}

impl DefaultPoolConfig {
    pub fn new(cpu_count: usize) -> Self {
        Self {
            max_workers: cpu_count.max(1),
            buffer_size: 100,
        }
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }
}

impl Default for DefaultPoolConfig {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

impl PoolConfig for DefaultPoolConfig {
    fn max_workers(&self) -> usize {
        self.max_workers
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }
}
