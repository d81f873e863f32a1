use std::env;
use std::path::PathBuf;

pub struct Configuration {
    pub dataset_path: PathBuf,
    pub listen_port: u16,
}

impl Configuration {
    pub fn from_env() -> Configuration {
        let dataset_path = env::var("RACE_ROUTES_CSV")
            .unwrap_or_else(|_| "train_routes.csv".to_owned())
            .into();
        let listen_port = env::var("RACE_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3030);

        Configuration {
            dataset_path,
            listen_port,
        }
    }
}
