/*
 * Copyright © 2024, United States Government, as represented by the Administrator of 
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

//! hosting layer for ODIN web services. This wraps an application specific axum [`Router`] into a
//! service with permissive CORS, request tracing and an optional static file fallback (for the
//! browser front end), and runs it until a [`CancellationToken`] is triggered

use std::{net::SocketAddr, path::PathBuf};

use axum::{Json, Router, http::StatusCode, response::{IntoResponse, Response}};
use serde::{Deserialize,Serialize};
use serde_json::json;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info,warn};

pub mod errors;
use errors::{OdinServerResult,init_error};

type Result<T> = OdinServerResult<T>;

#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct ServerConfig {
    #[serde(default="default_sock_addr")]
    pub sock_addr: SocketAddr,

    /// if set, requests that are not handled by the service router are served from here
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

fn default_sock_addr()->SocketAddr { SocketAddr::from(([0,0,0,0], 8000)) }

impl Default for ServerConfig {
    fn default()->Self {
        ServerConfig { sock_addr: default_sock_addr(), static_dir: None }
    }
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}", self.sock_addr)
    }
}

/// add the layers every ODIN service gets to the provided router
pub fn build_router (config: &ServerConfig, router: Router) -> Router {
    let router = if let Some(dir) = &config.static_dir {
        if !dir.is_dir() { warn!("static dir {:?} does not exist", dir) }
        router.fallback_service( ServeDir::new(dir))
    } else {
        router
    };

    router
        .layer( CorsLayer::permissive())
        .layer( TraceLayer::new_for_http())
}

/// bind to the configured socket address and serve `router` until `cancel` is triggered.
/// Returns after all open connections are closed
pub async fn serve (config: ServerConfig, router: Router, cancel: CancellationToken) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.sock_addr).await
        .map_err(|e| init_error(format!("failed to bind {}: {}", config.sock_addr, e)))?;
    let local_addr = listener.local_addr()?;
    let router = build_router( &config, router);

    info!("serving http://{}", local_addr);
    axum::serve( listener, router)
        .with_graceful_shutdown( cancel.cancelled_owned())
        .await?;
    info!("server on {} terminated", local_addr);

    Ok(())
}

pub fn spawn_server_task (config: ServerConfig, router: Router, cancel: CancellationToken) -> JoinHandle<Result<()>> {
    tokio::spawn( serve( config, router, cancel))
}

//--- handler utility functions

/// error response with a `{"detail": msg}` JSON body
pub fn detail_response (status: StatusCode, msg: impl ToString) -> Response {
    (status, Json( json!({ "detail": msg.to_string() }))).into_response()
}

pub fn server_error (msg: &str) -> Response {
    detail_response( StatusCode::INTERNAL_SERVER_ERROR, msg)
}

pub fn service_unavailable (msg: &str) -> Response {
    detail_response( StatusCode::SERVICE_UNAVAILABLE, msg)
}
