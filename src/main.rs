use std::process::ExitCode;

use client::ClientCore;
use options::GameOptions;

mod client;
mod error;
mod game;
mod options;
mod shared;
mod utils;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = GameOptions::from_env();
    log::info!(
        "Starting Block Mover, assets from '{}'.",
        options.asset_dir.display()
    );

    let result = ClientCore::new(options).and_then(|mut core| core.run());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            log::error!("{why}");
            ExitCode::FAILURE
        }
    }
}
