use clap::Parser;
use greetdemo::{logger, run_walkthrough, OutputFormat, WalkthroughOptions};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "greetdemo")]
#[command(about = "Greeter and bounded sequence walkthrough", long_about = None, version)]
struct Cli {
    /// Name for the first greeter
    #[arg(long, default_value = "Taro")]
    name: String,

    /// Second name for the dual greeter
    #[arg(long, default_value = "Jiro")]
    second_name: String,

    /// Comma-separated items wrapped by the bounded sequence
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, default_values_t = [1i64, 2, 3])]
    items: Vec<i64>,

    /// Index to look up (repeatable, stops at the first out-of-range index)
    #[arg(long = "index", value_name = "I", default_values_t = [0usize, 3])]
    indices: Vec<usize>,

    /// JSON output instead of plain text
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI args: {:?}", cli);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Plain
    };

    let options = WalkthroughOptions {
        name: cli.name,
        second_name: cli.second_name,
        items: cli.items,
        index_probes: cli.indices,
    };

    match run_walkthrough(&options, format) {
        Ok((output, failure)) => {
            print!("{}", output);
            if let Some(e) = failure {
                tracing::debug!("walkthrough stopped: {:?}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
