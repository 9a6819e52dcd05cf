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

use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use odin_common::{BoundingBox, net::get_text};

use crate::{FirmsConfig, FirmsSource, errors::{OdinFirmsError, Result}};

/// abstraction for where we get the raw CSV text of a FIRMS source from
#[async_trait]
pub trait FireDataSource: Send + Sync {

    /// do we have the credentials to retrieve data at all
    fn check_credentials (&self)->Result<()> { Ok(()) }

    /// retrieve the CSV text for the given source and day range
    async fn fetch (&self, source: FirmsSource, days: u32)->Result<String>;
}

/// the [`FireDataSource`] for the FIRMS area API
pub struct FirmsClient {
    client: Client,
    base_url: String,
    map_key: Option<String>,
    bounds: BoundingBox<f64>,
    request_timeout: Duration,
}

impl FirmsClient {
    /// note this resolves the map key once, i.e. changes of NASA_API_KEY after this call are not picked up
    pub fn new (config: &FirmsConfig)->Self {
        FirmsClient {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            map_key: config.resolve_map_key(),
            bounds: config.bounds,
            request_timeout: config.request_timeout
        }
    }

    pub fn has_map_key (&self)->bool { self.map_key.is_some() }

    /// according to https://firms.modaps.eosdis.nasa.gov/api/area/
    ///   [BASE_URL]/[MAP_KEY]/[SOURCE]/[WEST],[SOUTH],[EAST],[NORTH]/[DAY_RANGE]
    ///   e.g. .../api/area/csv/<map-key>/VIIRS_NOAA21_NRT/-75,-15,-45,5/5
    pub fn request_url (&self, map_key: &str, source: FirmsSource, days: u32)->String {
        let bbox = &self.bounds;
        format!( "{}/{}/{}/{},{},{},{}/{}", self.base_url, map_key, source, bbox.west, bbox.south, bbox.east, bbox.north, days)
    }
}

#[async_trait]
impl FireDataSource for FirmsClient {
    fn check_credentials (&self)->Result<()> {
        if self.map_key.is_some() { Ok(()) } else { Err( OdinFirmsError::MissingCredential) }
    }

    async fn fetch (&self, source: FirmsSource, days: u32)->Result<String> {
        let map_key = self.map_key.as_deref().ok_or( OdinFirmsError::MissingCredential)?;
        let url = self.request_url( map_key, source, days);
        Ok( get_text( &self.client, &url, self.request_timeout).await? )
    }
}
