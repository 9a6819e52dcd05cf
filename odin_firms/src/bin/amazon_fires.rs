/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

#![allow(unused)]

use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info,warn};
use tracing_subscriber::EnvFilter;

use odin_server::{ServerConfig, spawn_server_task};
use odin_firms::{
    FirmsConfig, MAP_KEY_ENV, load_config,
    aggregator::FirmsAggregator, fire_service::fire_router, firms_client::FirmsClient,
    live_importer::LiveFirmsImporter, snapshot::FireStore
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "serve active fire detections for the Legal Amazon region")]
pub struct Args {
    /// pathname of the FirmsConfig RON file (defaults are used if not set)
    #[arg(short,long)]
    pub config: Option<PathBuf>,

    /// socket address to serve on
    #[arg(short,long, default_value = "0.0.0.0:8000")]
    pub addr: SocketAddr,

    /// directory with static web content (e.g. a map front end)
    #[arg(short,long)]
    pub static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("info")))  // use RUST_LOG to set max level
        .init();

    let args = Args::parse();

    let config: FirmsConfig = match &args.config {
        Some(path) => load_config( path)?,
        None => FirmsConfig::default()
    };
    let server_config = ServerConfig { sock_addr: args.addr, static_dir: args.static_dir.clone() };

    let client = FirmsClient::new( &config);
    if !client.has_map_key() {
        warn!("no FIRMS map key - set 'map_key' in the config or {}", MAP_KEY_ENV);
        warn!("obtain one from https://firms.modaps.eosdis.nasa.gov/api/map_key/");
    }

    let store = Arc::new( FireStore::new());
    let aggregator = Arc::new( FirmsAggregator::new( &config, Arc::new(client), store));

    let cancel = CancellationToken::new();
    let importer = LiveFirmsImporter::start( aggregator.clone(), config.update_interval, cancel.child_token());
    let mut server = spawn_server_task( server_config, fire_router( aggregator), cancel.clone());

    let early_exit = tokio::select! {
        _ = tokio::signal::ctrl_c() => None,
        res = &mut server => Some(res) // server failed (e.g. could not bind)
    };

    info!("shutting down..");
    cancel.cancel();
    let res = match early_exit {
        Some(res) => res,
        None => server.await
    };

    importer.shutdown().await;
    res??;

    info!("done");
    Ok(())
}
