use crate::core::{DemoTask, PoolFunctionKind};
use crate::demos::DEFAULT_POOL_INPUTS;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "process_demos")]
#[command(about = "Demonstrations of process-based parallelism")]
#[command(version)]
pub struct Cli {
    /// Print worker lifecycle events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start two worker processes (numbers and letters) and wait for both
    Dual,

    /// Square integers in a pool of worker processes
    Pool {
        /// Integers to square
        #[arg(allow_negative_numbers = true, default_values_t = DEFAULT_POOL_INPUTS)]
        inputs: Vec<i64>,

        /// Maximum number of worker processes (defaults to the CPU count)
        #[arg(short, long)]
        max_workers: Option<usize>,
    },

    /// Run one dual-demo task (spawned by `dual`)
    #[command(hide = true)]
    Worker {
        #[arg(value_enum)]
        task: DemoTask,
    },

    /// Serve pool tasks over stdin/stdout (spawned by `pool`)
    #[command(hide = true)]
    PoolWorker {
        #[arg(value_enum)]
        function: PoolFunctionKind,
    },
}
