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

//! the HTTP interface for fire data

use std::sync::Arc;
use axum::{
    Json, Router,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tracing::info;

use odin_server::{server_error, service_unavailable};
use crate::{
    aggregator::FirmsAggregator, errors::OdinFirmsError,
    query::{FireQuery, GeoJsonQuery, get_fires, get_geojson, get_stats}
};

impl IntoResponse for OdinFirmsError {
    fn into_response (self)->Response {
        match self {
            OdinFirmsError::Unavailable => service_unavailable( "fire data not yet available"),
            other => server_error( &other.to_string())
        }
    }
}

/// the routes of the fire service. Queries read the current snapshot of the aggregator store
pub fn fire_router (aggregator: Arc<FirmsAggregator>)->Router {
    Router::new()
        .route( "/", get( root_handler))
        .route( "/api/fires", get( fires_handler))
        .route( "/api/fires/stats", get( stats_handler))
        .route( "/api/fires/geojson", get( geojson_handler))
        .route( "/api/fires/refresh", post( refresh_handler))
        .with_state( aggregator)
}

async fn root_handler ()->Json<Value> {
    Json( json!({
        "message": "Amazon Fire Monitoring API",
        "endpoints": [ "/api/fires", "/api/fires/stats", "/api/fires/geojson", "/api/fires/refresh" ]
    }))
}

async fn fires_handler (State(aggregator): State<Arc<FirmsAggregator>>, Query(query): Query<FireQuery>)->Response {
    let snapshot = aggregator.store().current();
    match get_fires( &snapshot, &query) {
        Ok(list) => Json(list).into_response(),
        Err(e) => e.into_response()
    }
}

async fn stats_handler (State(aggregator): State<Arc<FirmsAggregator>>)->Response {
    let snapshot = aggregator.store().current();
    match get_stats( &snapshot) {
        Ok(stats) => Json(stats).into_response(),
        Err(e) => e.into_response()
    }
}

async fn geojson_handler (State(aggregator): State<Arc<FirmsAggregator>>, Query(query): Query<GeoJsonQuery>)->Response {
    let snapshot = aggregator.store().current();
    match get_geojson( &snapshot, &query) {
        Ok(fc) => Json(fc).into_response(),
        Err(e) => e.into_response()
    }
}

/// start an out-of-band import cycle and return right away
async fn refresh_handler (State(aggregator): State<Arc<FirmsAggregator>>)->Json<Value> {
    info!("fire data refresh requested");
    aggregator.spawn_cycle();

    Json( json!({ "message": "fire data update started" }))
}
