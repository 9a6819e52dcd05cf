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

// run with "cargo test test_parser -- --nocapture"

mod common;
use common::*;

use odin_firms::{FireRecord, parser::parse_records};

#[test]
fn test_well_formed () {
    let recs = parse_records( &csv( MODIS_HEADER, &[MANAUS_ROW, LIMA_ROW]));
    assert_eq!( recs.len(), 2);

    let r = &recs[0];
    println!("{r:?}");
    assert_eq!( r.latitude, Some(-3.119));
    assert_eq!( r.longitude, Some(-60.0217));
    assert_eq!( r.brightness, 320.5);
    assert_eq!( r.scan, 1.0);
    assert_eq!( r.track, 1.0);
    assert_eq!( r.acq_date, "2024-09-01");
    assert_eq!( r.acq_time, "1705");
    assert_eq!( r.satellite, "Terra");
    assert_eq!( r.confidence, 85);
    assert_eq!( r.version, "6.1NRT");
    assert_eq!( r.bright_t31, 295.3);
    assert_eq!( r.frp, 12.4);
    assert_eq!( r.daynight, "D");
    assert_eq!( r.source, None);
    assert_eq!( r.extra.get("instrument").map(|s| s.as_str()), Some("MODIS"));

    assert_eq!( recs[1].latitude, Some(-12.0464));
}

#[test]
fn test_bad_cells () {
    let text = csv( MODIS_HEADER, &[
        "-3.5,x,abc,1.0,,2024-09-01,0900,Aqua,MODIS,85.7,6.1NRT,nan,1e400,D",
        " -3.5 , -60.5 ,300,1,1, 2024-09-01 ,0900,Aqua,MODIS, ,6.1NRT,290,2.5, N ",
    ]);
    let recs = parse_records( &text);
    assert_eq!( recs.len(), 2);

    let r = &recs[0];
    assert_eq!( r.latitude, Some(-3.5));
    assert_eq!( r.longitude, None);  // not a number -> absent, not 0
    assert_eq!( r.brightness, 0.0);
    assert_eq!( r.track, 0.0);
    assert_eq!( r.confidence, 85);   // truncated
    assert_eq!( r.bright_t31, 0.0);
    assert_eq!( r.frp, 0.0);         // overflow

    let r = &recs[1];
    assert_eq!( r.latitude, Some(-3.5));
    assert_eq!( r.longitude, Some(-60.5));
    assert_eq!( r.confidence, 0);
    assert_eq!( r.acq_date, "2024-09-01");
    assert_eq!( r.daynight, "N");
}

#[test]
fn test_zero_coordinates_are_present () {
    let recs = parse_records( &csv( MODIS_HEADER, &["0.0,-60.0,300,1,1,2024-09-01,0900,Aqua,MODIS,50,6.1NRT,290,2.5,D"]));
    assert_eq!( recs[0].latitude, Some(0.0));
    assert_eq!( recs[0].longitude, Some(-60.0));
}

#[test]
fn test_malformed_rows () {
    let text = format!("{}\r\n{}\r\n\r\n-3.0,-60.0,300\r\n{}\r\n", MODIS_HEADER, MANAUS_ROW, LIMA_ROW);
    let recs = parse_records( &text);
    assert_eq!( recs.len(), 2);
    assert_eq!( recs[0].daynight, "D"); // no trailing '\r'
    assert_eq!( recs[1].latitude, Some(-12.0464));

    // surplus cells are ignored
    let recs = parse_records( &csv( MODIS_HEADER, &[&format!("{},extra,cells", MANAUS_ROW)]));
    assert_eq!( recs.len(), 1);
    assert_eq!( recs[0].daynight, "D");
    assert_eq!( recs[0].extra.len(), 1);
}

#[test]
fn test_unquoted_cells () {
    // quotes are plain characters and header names get trimmed
    let header = MODIS_HEADER.replace("satellite", " satellite ").replace("instrument", "instrument ");
    let text = format!("\n\n{}\n{}\n", header,
                       "-3.5,-60.5,300,1,1,2024-09-01,0900,\"Aqua,MODIS,50,6.1NRT,290,2.5,\"N\"");
    let recs = parse_records( &text);
    assert_eq!( recs.len(), 1);

    let r = &recs[0];
    assert_eq!( r.satellite, "\"Aqua");
    assert_eq!( r.daynight, "\"N\"");
    assert_eq!( r.confidence, 50);
    assert_eq!( r.extra.get("instrument").map(|s| s.as_str()), Some("MODIS"));
}

#[test]
fn test_no_data () {
    assert!( parse_records("").is_empty());
    assert!( parse_records("\n\n").is_empty());
    assert!( parse_records( MODIS_HEADER).is_empty());
    assert!( parse_records( &format!("{}\n", MODIS_HEADER)).is_empty());
}

#[test]
fn test_viirs_columns () {
    let recs = parse_records( &csv( VIIRS_HEADER, &[BELEM_ROW]));
    assert_eq!( recs.len(), 1);

    let r = &recs[0];
    assert_eq!( r.confidence, 0); // VIIRS uses l/n/h
    assert_eq!( r.brightness, 0.0);
    assert_eq!( r.frp, 3.2);

    let keys: Vec<&str> = r.extra.keys().map(|k| k.as_str()).collect();
    assert_eq!( keys, vec!["bright_ti4", "instrument", "bright_ti5"]);
    assert_eq!( r.extra["bright_ti4"], "330.1");
}

#[test]
fn test_serialized_record () {
    let recs = parse_records( &csv( VIIRS_HEADER, &[BELEM_ROW]));
    let v = serde_json::to_value( &recs[0]).unwrap();
    println!("{v}");

    assert_eq!( v["latitude"], -1.4558);
    assert_eq!( v["bright_ti4"], "330.1"); // extra columns are inlined
    assert_eq!( v["confidence"], 0);
    assert!( v["source"].is_null());
}
