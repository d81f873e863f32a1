mod app_data;
mod configuration;
mod dataset;
mod error;
mod race;
mod route_table;
mod web;

use crate::app_data::AppData;
use crate::configuration::Configuration;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Configuration::from_env();
    let appdata = Arc::new(AppData::from_configuration(&config)?);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        web::main(appdata, config.listen_port).await;
    });
    Ok(())
}
