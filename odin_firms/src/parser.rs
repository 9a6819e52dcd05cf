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

//! parser for the FIRMS area CSV format: one header line with field names followed by one line per
//! hotspot. The format has no quoting. Cells are coerced by field name and bad cells are defaulted,
//! i.e. we only drop whole rows if they have fewer cells than the header has fields

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug,warn};
use crate::FireRecord;

/// parse all well formed rows of `text` into [`FireRecord`]s, in input order
pub fn parse_records (text: &str)->Vec<FireRecord> {
    let mut csv_reader = ReaderBuilder::new()
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader( text.as_bytes());

    let header: Vec<String> = match csv_reader.headers() {
        Ok(h) if !h.iter().all( str::is_empty) => h.iter().map( str::to_string).collect(),
        Ok(_) => {
            debug!("no data");
            return Vec::with_capacity(0)
        }
        Err(e) => {
            warn!("unreadable CSV header: {e}");
            return Vec::with_capacity(0)
        }
    };

    let mut records: Vec<FireRecord> = Vec::new();
    let mut n_malformed = 0;

    for res in csv_reader.records() {
        match res {
            Ok(values) => {
                if values.len() < header.len() {
                    debug!("skipping malformed row with {} of {} fields", values.len(), header.len());
                    n_malformed += 1;
                    continue
                }
                records.push( parse_record( &header, &values));
            }
            Err(e) => {
                debug!("skipping unreadable row: {e}");
                n_malformed += 1;
            }
        }
    }

    if n_malformed > 0 { warn!("skipped {} malformed rows", n_malformed) }
    if records.is_empty() { debug!("no data") }

    records
}

fn parse_record (header: &[String], values: &StringRecord)->FireRecord {
    let mut rec = FireRecord::default();

    for (name,v) in header.iter().zip( values.iter()) {
        match name.as_str() {
            "latitude"   => rec.latitude = parse_f64(v),
            "longitude"  => rec.longitude = parse_f64(v),
            "brightness" => rec.brightness = parse_f64(v).unwrap_or_default(),
            "scan"       => rec.scan = parse_f64(v).unwrap_or_default(),
            "track"      => rec.track = parse_f64(v).unwrap_or_default(),
            "bright_t31" => rec.bright_t31 = parse_f64(v).unwrap_or_default(),
            "frp"        => rec.frp = parse_f64(v).unwrap_or_default(),
            "confidence" => rec.confidence = parse_int(v).unwrap_or_default(),
            "acq_date"   => rec.acq_date = v.to_string(),
            "acq_time"   => rec.acq_time = v.to_string(),
            "satellite"  => rec.satellite = v.to_string(),
            "version"    => rec.version = v.to_string(),
            "daynight"   => rec.daynight = v.to_string(),
            "" | "source" => {} // source is ours to set
            other => { rec.extra.insert( other.to_string(), v.to_string()); }
        }
    }

    rec
}

fn parse_f64 (s: &str)->Option<f64> {
    s.parse::<f64>().ok().filter( |x| x.is_finite())
}

/// integers might be reported as decimals, which we truncate
fn parse_int (s: &str)->Option<i64> {
    s.parse::<i64>().ok().or_else( || parse_f64(s).map( |x| x.trunc() as i64))
}
