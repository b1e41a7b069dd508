mod cli;
mod config;
mod output;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();
    if let Err(err) = cli::run() {
        log::debug!("{err:?}");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
