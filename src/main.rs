use compute_sales::args::Args;
use compute_sales::report::ConsoleFileSink;
use log::error;
use std::process;

fn main() {
    env_logger::init();

    let args = Args::parse();
    let mut sink = ConsoleFileSink::new(&args.output);

    if let Err(err) = compute_sales::run(&args, &mut sink) {
        error!("run aborted: {}", err);
        println!("Error: {}", err);
        process::exit(1);
    }
}
