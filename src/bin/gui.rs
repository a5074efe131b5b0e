use log::error;
use mandelbrot_viewer::{RunGuiCommand, ViewerConfig};

fn main() {
    env_logger::init();

    let command = RunGuiCommand::new(ViewerConfig::default());

    if let Err(err) = command.execute() {
        error!("{}", err);
        std::process::exit(1);
    }
}
