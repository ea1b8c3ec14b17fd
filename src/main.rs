use clap::Parser;

use carlot::config::Config;
use carlot::{CarStore, Server, api, telemetry};

#[tokio::main]
async fn main() -> Result<(), carlot::Error> {
    let config = Config::parse();
    telemetry::init(&config.log, config.log_format)?;

    Server::bind(config.bind)
        .serve(api::routes(CarStore::new()))
        .await
}
