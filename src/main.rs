use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use snc::cli::{self, Args};
use std::process;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .expect("Error building log config");
    log4rs::init_config(config).expect("Error initializing log4rs");
}

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    init_logging(args.verbose);
    log::info!("#Start main()");

    if let Err(e) = cli::run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
