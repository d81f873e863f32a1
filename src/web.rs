use crate::app_data::AppData;
use crate::dataset::RouteRecord;
use crate::race::{race_frames, AnimationFrame};
use lazy_static::lazy_static;
use log::{error, info};
use lru::LruCache;
use serde::Deserialize;
use serde_json::json;
use serde_json::Value;
use std::collections::hash_map::DefaultHasher;
use std::convert::Infallible;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use warp::{Filter, Reply};

// Fixed render order of the race bars.
pub const MODES: [&str; 3] = ["Train", "Walking", "Cycling"];

lazy_static! {
    pub static ref CACHE: Mutex<LruCache<u64, Value>> =
        Mutex::new(LruCache::new(NonZeroUsize::new(64).unwrap()));
}

fn cache_key(origin: &str, destination: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    origin.hash(&mut hasher);
    "DEST".hash(&mut hasher);
    destination.hash(&mut hasher);
    hasher.finish()
}

#[derive(Deserialize)]
pub struct RaceRequest {
    pub origin: String,
    pub destination: String,
}

#[derive(Deserialize)]
pub struct DestinationsRequest {
    pub origin: String,
}

/// The full render payload for one route: raw per-mode metrics plus the
/// materialized animation timeline.
pub fn race_response(record: &RouteRecord) -> Result<Value, crate::error::Error> {
    let modes = vec![
        (MODES[0].to_owned(), record.total_time_in_train),
        (MODES[1].to_owned(), record.total_walking_time),
        (MODES[2].to_owned(), record.total_cycling_time),
    ];
    let frames: Vec<AnimationFrame> = race_frames(&modes)?.collect();

    Ok(json!({
        "origin": record.origin,
        "destination": record.destination,
        "times": {
            "Train": record.total_time_in_train,
            "Walking": record.total_walking_time,
            "Cycling": record.total_cycling_time,
        },
        "calories": {
            "Walking": record.calories_burnt_walking,
            "Cycling": record.calories_burnt_cycling,
        },
        "frames": frames,
    }))
}

fn process_race(ad: Arc<AppData>, req: RaceRequest) -> impl Reply {
    let record = match ad.table.lookup(&req.origin, &req.destination) {
        Ok(record) => record,
        Err(_) => {
            return warp::reply::json(&"No data available for this route.");
        }
    };

    let mut cache = CACHE.lock().unwrap();
    let key = cache_key(&req.origin, &req.destination);
    if let Some(cached) = cache.get(&key) {
        return warp::reply::json(cached);
    }

    let response = match race_response(record) {
        Ok(response) => response,
        Err(e) => {
            error!("race timeline {} -> {}: {e}", req.origin, req.destination);
            return warp::reply::json(&json!({ "error": e.to_string() }));
        }
    };

    let cached_response = cache.get_or_insert_mut(key, || response);
    warp::reply::json(cached_response)
}

fn with_appdata(
    ad: Arc<AppData>,
) -> impl Filter<Extract = (Arc<AppData>,), Error = Infallible> + Clone {
    warp::any().map(move || ad.clone())
}

pub async fn main(appdata: Arc<AppData>, port: u16) {
    let cors_policy = warp::cors()
        .allow_any_origin()
        .allow_headers(vec![
            "Access-Control-Allow-Origin",
            "Origin",
            "Accept",
            "X-Requested-With",
            "Content-Type",
        ])
        .allow_methods(["POST", "GET"]);

    let log = warp::log("warp");

    let stations = warp::get()
        .and(with_appdata(appdata.clone()))
        .and(warp::path!("stations"))
        .map(|ad: Arc<AppData>| warp::reply::json(&ad.table.origins()));

    let destinations = warp::get()
        .and(with_appdata(appdata.clone()))
        .and(warp::path!("destinations"))
        .and(warp::query::<DestinationsRequest>())
        .map(|ad: Arc<AppData>, req: DestinationsRequest| {
            warp::reply::json(&ad.table.destinations_from(&req.origin))
        });

    let race = warp::post()
        .and(with_appdata(appdata.clone()))
        .and(warp::path!("race"))
        .and(warp::body::json())
        .map(process_race);

    let routes = stations
        .or(destinations)
        .or(race)
        .with(cors_policy)
        .with(log);

    info!("Serving station race API on port {port}");
    warp::serve(routes).run(([0, 0, 0, 0], port)).await;
}
