use clap::Parser;

fn main() {
    let cli = gocheat::cli::Cli::parse();

    if let Err(err) = gocheat::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
