//! Caresum - Discharge Audio Summarizer
//!
//! 退院患者フィードバック音声をGeminiで週次レポートに要約する

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use clap::Parser;

use caresum::adapter::config::Config;
use caresum::driver::{Args, AudioReportWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    env_logger::init();

    // 引数の検証は環境・ネットワークへのアクセスより先に行う
    let args = Args::parse();

    // .env はあれば読み込む（なくてもよい）
    dotenv::dotenv().ok();

    // Load configuration (fail fast before any network operation)
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    };

    // Create workflow with injected dependencies
    let workflow = AudioReportWorkflow::new(config);

    match workflow.execute(&args).await {
        Ok(report) => println!("{}", report.text()),
        Err(e) => {
            // 失敗の種類は区別しない
            println!("Error processing audio: {:#}", e);
            std::process::exit(1);
        }
    }
}
