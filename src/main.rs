//! md2audio - markdown 文档转语音
//!
//! 启动流程：解析参数 → 加载配置 → 初始化日志 → 检查凭据并组装 → 执行命令

use clap::{CommandFactory, Parser};

use md2audio::config::{load_config, print_config, LogConfig};
use md2audio::{build_app, Cli, CliCommand, RunOutcome};

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version 走这里，退出码 0
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let Some(command) = cli.into_command() else {
        let _ = Cli::command().print_help();
        return;
    };

    if let Err(e) = run(command).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(command: CliCommand) -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);
    print_config(&config);

    let app = build_app(&config, |name| std::env::var(name).ok()).await?;

    match app.run(command).await? {
        RunOutcome::Converted { output } => {
            println!("Audio saved to: {}", output.display());
        }
        RunOutcome::Previewed { files } => {
            for file in files {
                println!("Sample saved to: {}", file.display());
            }
        }
    }

    Ok(())
}

/// 初始化日志，输出到 stderr；`RUST_LOG` 优先于配置
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("warn,md2audio={}", log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
