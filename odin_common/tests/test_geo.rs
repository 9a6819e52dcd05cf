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

use odin_common::geo::*;

// run with "cargo test test_geo -- --nocapture"

/// an L-shaped polygon with horizontal edges at the top and in the notch
fn l_shape()->GeoPolygon {
    GeoPolygon::from_lon_lat_degrees( &[
        (0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (2.0, 2.0), (2.0, 4.0), (0.0, 4.0)
    ])
}

#[test]
fn test_square() {
    let poly = GeoPolygon::from_lon_lat_degrees( &[(-1.0,-1.0), (1.0,-1.0), (1.0,1.0), (-1.0,1.0), (-1.0,-1.0)]);
    assert!( poly.contains( 0.0, 0.0));
    assert!( poly.contains( 0.5, -0.5));
    assert!( !poly.contains( 2.0, 0.0));
    assert!( !poly.contains( -2.0, 0.0));
    assert!( !poly.contains( 0.0, 1.5));
    assert!( !poly.contains( 0.0, -1.5));
}

#[test]
fn test_horizontal_edges() {
    let poly = l_shape();

    // rays at the latitude of the notch edge (y=2) must not pick up a stale intersection
    assert!( poly.contains( 1.0, 2.0));
    assert!( poly.contains( 3.0, 1.0));
    assert!( poly.contains( 1.0, 3.0));
    assert!( !poly.contains( 3.0, 3.0)); // in the notch
    assert!( !poly.contains( 5.0, 1.0));
    assert!( !poly.contains( 1.0, 4.5));
}

#[test]
fn test_open_ring_is_closed() {
    let poly = l_shape();
    let vertices = poly.as_exterior_geo_points();
    assert_eq!( vertices.len(), 7);
    assert_eq!( vertices.first(), vertices.last());
}

#[test]
fn test_polygon_serde() {
    let input = "[(-1.0,-1.0), (1.0,-1.0), (1.0,1.0), (-1.0,1.0)]";
    let poly: GeoPolygon = ron::from_str(input).unwrap();
    println!("deserialized polygon: {poly:?}");
    assert_eq!( poly.exterior_coords_count(), 5);
    assert!( poly.contains( 0.0, 0.0));

    let json = serde_json::to_string(&poly).unwrap();
    println!("serialized polygon: {json}");
    assert!( json.starts_with("[[-1.0,-1.0]"));
}

#[test]
fn test_geo_point() {
    let p = GeoPoint::from_lon_lat_degrees( -60.0217, -3.1190);
    assert_eq!( p.longitude_degrees(), -60.0217);
    assert_eq!( p.latitude_degrees(), -3.1190);

    let s = serde_json::to_string(&p).unwrap();
    assert_eq!( s, r#"{"lon":-60.0217,"lat":-3.119}"#);
}
