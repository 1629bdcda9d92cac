use simplelog::{Config, LevelFilter, TermLogger, TerminalMode};

pub fn create_logger() {
    if TermLogger::init(LevelFilter::Info, Config::default(), TerminalMode::Mixed).is_err() {
        eprintln!("Failed to initialize the terminal logger");
    }
}
