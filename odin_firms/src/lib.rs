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

//! near realtime active fire detections for the Legal Amazon region, imported from NASA's
//! Fire Information for Resource Management System (FIRMS).
//! See https://firms.modaps.eosdis.nasa.gov/api/area/ for the upstream API.
//!
//! Data flows from the [`live_importer::LiveFirmsImporter`] (periodic schedule) through the
//! [`aggregator::FirmsAggregator`] (fetch, parse and geofilter per source) into the
//! [`snapshot::FireStore`], from which [`query`] functions and the [`fire_service`] routes read.

use std::{path::Path, time::Duration, fs};
use chrono::{DateTime,Utc};
use serde::{Serialize,Deserialize};
use indexmap::IndexMap;
use strum::{Display,EnumString,EnumIter,AsRefStr};

use odin_common::{
    BoundingBox,
    datetime::{parse_date_hhmm, deserialize_duration, serialize_duration, minutes, secs},
    geo::{GeoPoint, GeoPolygon},
};

pub mod errors;
pub use errors::{Result, OdinFirmsError};
use errors::config_error;

pub mod region;
pub mod parser;
pub mod firms_client;
pub mod snapshot;
pub mod aggregator;
pub mod query;
pub mod live_importer;
pub mod fire_service;

/// environment variable that holds the FIRMS map key if it is not set in the config
pub const MAP_KEY_ENV: &str = "NASA_API_KEY";

/// the FIRMS data products we import. The string representation is the FIRMS source name
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize,Display,EnumString,EnumIter,AsRefStr)]
pub enum FirmsSource {
    #[serde(rename="MODIS_NRT")] #[strum(serialize="MODIS_NRT")]
    ModisNrt,

    #[serde(rename="VIIRS_SNPP_NRT")] #[strum(serialize="VIIRS_SNPP_NRT")]
    ViirsSnppNrt,

    #[serde(rename="VIIRS_NOAA20_NRT")] #[strum(serialize="VIIRS_NOAA20_NRT")]
    ViirsNoaa20Nrt,

    #[serde(rename="VIIRS_NOAA21_NRT")] #[strum(serialize="VIIRS_NOAA21_NRT")]
    ViirsNoaa21Nrt,
}

/// one active fire detection (hotspot) as reported by a FIRMS source.
/// Numeric cells that can't be parsed are defaulted to 0, coordinates are `None` in this case
#[derive(Debug,Clone,PartialEq,Default,Serialize,Deserialize)]
pub struct FireRecord {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub brightness: f64,
    pub scan: f64,
    pub track: f64,
    pub acq_date: String, // YYYY-MM-DD
    pub acq_time: String, // HHMM (UTC)
    pub satellite: String,
    pub confidence: i64,
    pub version: String,
    pub bright_t31: f64,
    pub frp: f64,        // fire radiative power [MW]
    pub daynight: String,

    /// set by the aggregator, not part of the upstream data
    pub source: Option<FirmsSource>,

    /// columns of the upstream product we don't interpret (e.g. VIIRS `bright_ti4`), in header order
    #[serde(flatten)]
    pub extra: IndexMap<String,String>,
}

impl FireRecord {
    pub fn position (&self)->Option<GeoPoint> {
        match (self.longitude, self.latitude) {
            (Some(lon),Some(lat)) => Some( GeoPoint::from_lon_lat_degrees(lon,lat)),
            _ => None
        }
    }

    /// the acquisition time, or `None` if `acq_date` and `acq_time` do not form a valid `YYYY-MM-DD HHMM` spec
    pub fn acquisition_time (&self)->Option<DateTime<Utc>> {
        parse_date_hhmm( &self.acq_date, &self.acq_time)
    }
}

/// configuration of the FIRMS import
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct FirmsConfig {
    #[serde(default="default_base_url")]
    pub base_url: String,

    /// keep this private - it is rate limited. If not set we use the NASA_API_KEY env var
    #[serde(default)]
    pub map_key: Option<String>,

    /// the rectangle we request from FIRMS
    #[serde(default="default_bounds")]
    pub bounds: BoundingBox<f64>,

    #[serde(default="default_sources")]
    pub sources: Vec<FirmsSource>,

    /// day range of each request (FIRMS only accepts 1..10)
    #[serde(default="default_days")]
    pub days: u32,

    #[serde(default="default_request_timeout", deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub request_timeout: Duration,

    #[serde(default="default_update_interval", deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub update_interval: Duration,

    /// the polygon we filter received records with. Defaults to the Legal Amazon
    #[serde(default)]
    pub region: Option<GeoPolygon>,
}

fn default_base_url()->String { "https://firms.modaps.eosdis.nasa.gov/api/area/csv".to_string() }
fn default_bounds()->BoundingBox<f64> { BoundingBox::new( -75.0, -15.0, -45.0, 5.0) }
fn default_sources()->Vec<FirmsSource> {
    vec![ FirmsSource::ModisNrt, FirmsSource::ViirsSnppNrt, FirmsSource::ViirsNoaa20Nrt, FirmsSource::ViirsNoaa21Nrt ]
}
fn default_days()->u32 { 5 }
fn default_request_timeout()->Duration { secs(60) }
fn default_update_interval()->Duration { minutes(10) }

impl Default for FirmsConfig {
    fn default()->Self {
        FirmsConfig {
            base_url: default_base_url(),
            map_key: None,
            bounds: default_bounds(),
            sources: default_sources(),
            days: default_days(),
            request_timeout: default_request_timeout(),
            update_interval: default_update_interval(),
            region: None
        }
    }
}

impl FirmsConfig {
    /// the configured map key, falling back to the NASA_API_KEY environment variable. Blank values count as missing
    pub fn resolve_map_key (&self)->Option<String> {
        self.map_key.clone()
            .or_else( || std::env::var(MAP_KEY_ENV).ok())
            .map( |k| k.trim().to_string())
            .filter( |k| !k.is_empty())
    }

    pub fn region_polygon (&self)->GeoPolygon {
        self.region.clone().unwrap_or_else( region::legal_amazon)
    }

    fn check (self)->Result<Self> {
        if self.days < 1 || self.days > 10 { return Err( config_error!("day range {} outside of 1..10", self.days)) }
        if self.sources.is_empty() { return Err( config_error!("no sources configured")) }
        if self.update_interval.is_zero() { return Err( config_error!("zero update interval")) }
        if let Some(region) = &self.region {
            if region.exterior_coords_count() < 4 { return Err( config_error!("region polygon needs at least 3 vertices")) }
        }
        Ok(self)
    }
}

pub fn parse_config (src: &str)->Result<FirmsConfig> {
    let config: FirmsConfig = ron::from_str(src)?;
    config.check()
}

pub fn load_config<P: AsRef<Path>> (path: P)->Result<FirmsConfig> {
    let src = fs::read_to_string( path.as_ref())?;
    parse_config( &src)
}
