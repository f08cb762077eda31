use std::io::Read;
use std::process::ExitCode;

use aoc_helper::config;
use aoc_helper::utils::logging;
use aoc_helper::workflow::{
    download_challenge, exit_for_error, submit_final_day, submit_solution,
};
use aoc_helper::{AocClient, Config, Part, Puzzle};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "每日谜题下载与提交工具", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 下载当前目录对应题目的输入和描述
    Download,
    /// 从标准输入读取答案并提交
    Submit {
        #[arg(long, value_enum)]
        part: Part,
    },
    /// 第 25 天第二部分的收尾提交
    #[command(name = "submit-25")]
    Submit25,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // 先加载 .env，RUST_LOG 也可以写在里面
    config::load_dotenv();
    logging::init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => Ok(code),
        Err(e) => match exit_for_error(&e, &mut std::io::stdout()) {
            Some(code) => Ok(ExitCode::from(code)),
            None => Err(e),
        },
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    // 加载配置
    let config = Config::from_env()?;
    let puzzle = Puzzle::from_cwd()?;
    let client = AocClient::new(&config)?;
    let mut stdout = std::io::stdout();

    let code = match cli.command {
        Commands::Download => {
            download_challenge(&client, &config, puzzle, &mut stdout).await?;
            0
        }
        Commands::Submit { part } => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            submit_solution(&client, puzzle, part, &raw, &mut stdout)
                .await?
                .exit_code()
        }
        Commands::Submit25 => submit_final_day(&client, puzzle, &mut stdout)
            .await?
            .exit_code(),
    };

    Ok(ExitCode::from(code as u8))
}
