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

//! read-only views of a [`FireSnapshot`]. All functions fail with [`OdinFirmsError::Unavailable`] if the
//! snapshot was never populated, to distinguish "no data yet" from "no fires"

use chrono::{DateTime,Utc};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use indexmap::IndexMap;
use serde::{Serialize,Deserialize};
use serde_json::json;

use odin_common::{MinMaxAvg, round_to, datetime::{utc_now, hours_before}};
use crate::{FireRecord, errors::{OdinFirmsError, Result}, snapshot::FireSnapshot};

pub const UNKNOWN: &str = "unknown";

/// record filter parameters. Empty `source` values are treated as not set
#[derive(Debug,Clone,Deserialize)]
pub struct FireQuery {
    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub min_confidence: i64,

    #[serde(default="default_hours_ago")]
    pub hours_ago: i64,
}

fn default_hours_ago()->i64 { 24 }

impl Default for FireQuery {
    fn default()->Self {
        FireQuery { source: None, min_confidence: 0, hours_ago: default_hours_ago() }
    }
}

#[derive(Debug,Clone,Deserialize)]
pub struct GeoJsonQuery {
    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub min_confidence: i64,
}

#[derive(Debug,Serialize)]
pub struct FireList {
    pub total: usize,
    pub last_update: Option<DateTime<Utc>>,
    pub fires: Vec<FireRecord>,
}

#[derive(Debug,Serialize)]
pub struct FireStats {
    pub total_fires: usize,
    pub avg_confidence: f64,  // over records with non-zero confidence
    pub avg_fire_power: f64,  // over records with non-zero frp
    pub by_source: IndexMap<String,usize>,
    pub by_period: IndexMap<String,usize>,
    pub last_update: Option<DateTime<Utc>>,
}

fn check_populated (snapshot: &FireSnapshot)->Result<()> {
    if snapshot.is_populated() { Ok(()) } else { Err( OdinFirmsError::Unavailable) }
}

fn matches_source (rec: &FireRecord, source: &Option<String>)->bool {
    match source.as_deref() {
        Some(src) if !src.is_empty() => rec.source.is_some_and( |s| s.as_ref() == src),
        _ => true
    }
}

/// records of the requested source with at least `min_confidence` that were acquired within the last `hours_ago`
/// hours. Records without a valid acquisition time are always included
pub fn get_fires (snapshot: &FireSnapshot, query: &FireQuery)->Result<FireList> {
    check_populated( snapshot)?;
    let cutoff = hours_before( utc_now(), query.hours_ago);

    let fires: Vec<FireRecord> = snapshot.records.iter()
        .filter( |rec| matches_source( rec, &query.source))
        .filter( |rec| rec.confidence >= query.min_confidence)
        .filter( |rec| rec.acquisition_time().is_none_or( |t| t >= cutoff))
        .cloned()
        .collect();

    Ok( FireList { total: fires.len(), last_update: snapshot.last_update, fires } )
}

/// totals, rounded averages of non-zero confidence and frp values, and counts per source and per `daynight` value.
/// Records parse a missing `daynight` column and an empty cell alike into "", which we count as "unknown"
pub fn get_stats (snapshot: &FireSnapshot)->Result<FireStats> {
    check_populated( snapshot)?;

    let mut confidence = MinMaxAvg::new();
    let mut frp = MinMaxAvg::new();
    let mut by_source: IndexMap<String,usize> = IndexMap::new();
    let mut by_period: IndexMap<String,usize> = IndexMap::new();

    for rec in &snapshot.records {
        if rec.confidence != 0 { confidence.add( rec.confidence as f64) }
        if rec.frp != 0.0 { frp.add( rec.frp) }

        let source = rec.source.map( |s| s.to_string()).unwrap_or_else( || UNKNOWN.to_string());
        *by_source.entry( source).or_default() += 1;

        let period = if rec.daynight.is_empty() { UNKNOWN.to_string() } else { rec.daynight.clone() };
        *by_period.entry( period).or_default() += 1;
    }

    Ok( FireStats {
        total_fires: snapshot.records.len(),
        avg_confidence: round_to( confidence.avg_or(0.0), 2),
        avg_fire_power: round_to( frp.avg_or(0.0), 2),
        by_source,
        by_period,
        last_update: snapshot.last_update
    })
}

/// point features for all records of the requested source with at least `min_confidence`.
/// The collection carries a `metadata` foreign member with the feature count and update time
pub fn get_geojson (snapshot: &FireSnapshot, query: &GeoJsonQuery)->Result<FeatureCollection> {
    check_populated( snapshot)?;

    let features: Vec<Feature> = snapshot.records.iter()
        .filter( |rec| matches_source( rec, &query.source))
        .filter( |rec| rec.confidence >= query.min_confidence)
        .filter_map( to_feature)
        .collect();

    let mut metadata = JsonObject::new();
    metadata.insert( "metadata".to_string(), json!({
        "total": features.len(),
        "last_update": snapshot.last_update
    }));

    Ok( FeatureCollection { bbox: None, features, foreign_members: Some(metadata) } )
}

fn to_feature (rec: &FireRecord)->Option<Feature> {
    let pos = rec.position()?;

    let properties = json!({
        "brightness": rec.brightness,
        "confidence": rec.confidence,
        "frp": rec.frp,
        "satellite": rec.satellite,
        "source": rec.source,
        "acq_date": rec.acq_date,
        "acq_time": rec.acq_time,
        "daynight": rec.daynight
    });

    Some( Feature {
        bbox: None,
        geometry: Some( Geometry::new( Value::Point( vec![pos.longitude_degrees(), pos.latitude_degrees()]))),
        id: None,
        properties: properties.as_object().cloned(),
        foreign_members: None
    })
}
