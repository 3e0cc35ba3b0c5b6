use calcexpr::evaluate;
use clap::Parser;
use log::LevelFilter;

/// calcexpr evaluates small arithmetic programs such as `x = 2 sqrt(x + 2) * 3`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Logs every binding and the program result.
    #[arg(short, long)]
    verbose: bool,

    /// The program to evaluate. Several arguments are joined with spaces.
    #[arg(required = true)]
    program: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let source = args.program.join(" ");

    match evaluate(&source) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
