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

//! common utility functions for network operations

use std::time::Duration;
use reqwest::{Client, StatusCode};

use crate::define_error;

define_error!{ pub OdinNetError = 
    NotFoundError(String) : "not found {0}",
    TimeoutError(Duration) : "request timed out after {0:?}",
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    StatusError(StatusCode) : "response status {0}"
}

pub type Result<T> = std::result::Result<T, OdinNetError>;

/// retrieve the body of a HTTP GET request as text, failing on any non-2xx status or if the
/// request (including body retrieval) does not complete within `timeout`.
/// Note that returned errors do not include the URL since it might contain access keys
pub async fn get_text (client: &Client, url: &str, timeout: Duration) -> Result<String> {
    let response = client.get(url)
        .timeout(timeout)
        .send().await
        .map_err( |e| map_request_error(e, timeout))?;

    match response.status() {
        status if status.is_success() => {
            response.text().await.map_err( |e| map_request_error(e, timeout))
        }
        StatusCode::NOT_FOUND => {
            Err( OdinNetError::NotFoundError( response.url().host_str().unwrap_or_default().to_string())) // path might contain keys
        }
        other => {
            Err( OdinNetError::StatusError(other))
        }
    }
}

fn map_request_error (e: reqwest::Error, timeout: Duration)->OdinNetError {
    if e.is_timeout() {
        OdinNetError::TimeoutError(timeout)
    } else {
        OdinNetError::HttpError( e.without_url())
    }
}
