use clap::Parser;
use process_demos::cli::{
    execute_dual, execute_pool, execute_pool_worker, execute_worker, Cli, Commands,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dual => execute_dual(cli.verbose).await,
        Commands::Pool {
            inputs,
            max_workers,
        } => execute_pool(inputs, max_workers, cli.verbose).await,
        Commands::Worker { task } => execute_worker(task),
        Commands::PoolWorker { function } => execute_pool_worker(function).await,
    };

    if let Err(error) = result {
        eprintln!("❌ Error: {error:#}");
        std::process::exit(1);
    }
}
