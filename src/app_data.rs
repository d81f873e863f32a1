use crate::configuration::Configuration;
use crate::dataset;
use crate::route_table::RouteTable;
use anyhow::Context;
use log::info;

/// Everything the request handlers need, built once at startup and shared
/// behind an `Arc`. The table is immutable for the process lifetime.
pub struct AppData {
    pub table: RouteTable,
}

impl AppData {
    pub fn from_configuration(config: &Configuration) -> anyhow::Result<AppData> {
        let records = dataset::load_records(&config.dataset_path).with_context(|| {
            format!("loading route dataset {}", config.dataset_path.display())
        })?;
        info!("Loaded {} directed route records", records.len());

        let table = RouteTable::build(records);
        info!("Route table holds {} entries after mirroring", table.len());

        Ok(AppData { table })
    }
}
