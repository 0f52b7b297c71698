use {
    base::{log_fatal, log_info},
    takepic::Config,
};

fn main() {
    base::init_stdout_logger();

    let config = Config::default();
    log_info!("takepic: opening {}", config.video().path().display());

    if let Err(error) = takepic::run(config) {
        log_fatal!("{}", error);
    }
}
