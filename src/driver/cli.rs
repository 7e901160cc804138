//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// 退院患者フィードバック音声を週次レポートに要約するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "caresum")]
#[command(about = "Summarize hospital discharge audio into a weekly report", long_about = None)]
pub struct Args {
    /// Path to the input audio file
    #[arg(long)]
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_input() {
        let args = Args::parse_from(["caresum", "--input", "/tmp/feedback.mp3"]);
        assert_eq!(args.input, "/tmp/feedback.mp3");
    }

    #[test]
    fn test_args_input_is_required() {
        let result = Args::try_parse_from(["caresum"]);
        assert!(result.is_err(), "--input must be required");
    }

    #[test]
    fn test_args_rejects_unknown_flags() {
        let result = Args::try_parse_from(["caresum", "--input", "a.mp3", "--retry"]);
        assert!(result.is_err());
    }
}
