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

//! this module provides support for simple geometries given in geodetic (WGS84) degrees.
//! We use the new type pattern around [geo](https://docs.rs/geo/latest/geo/index.html) types so that
//! we can add value semantics (longitude/latitude order) while still having access to `geo` algorithms.

use std::fmt;
use serde::{Serialize,Deserialize};
use serde::ser::{Serialize as SerializeTrait, Serializer, SerializeStruct};
use geo::{Coord, CoordsIter, LineString, Point, Polygon};

pub type GeoCoord = Coord<f64>;

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo::Point that uses geodetic degrees stored as f64 (x: longitude, y: latitude)
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        GeoPoint( Point::new( lon, lat))
    }

    #[inline] pub fn longitude_degrees(&self) -> f64 { self.0.x() }
    #[inline] pub fn latitude_degrees(&self) -> f64 { self.0.y() }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.0.x(),self.0.y())
    }
}

impl SerializeTrait for GeoPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("GeoPoint", 2)?;
        state.serialize_field("lon", &self.longitude_degrees())?;
        state.serialize_field("lat", &self.latitude_degrees())?;
        state.end()
    }
}

/* #endregion GeoPoint */

/* #region GeoPolygon **********************************************************************************************/

/// a simple (exterior ring only) polygon in geodetic degrees.
/// Vertices are given as (longitude,latitude) pairs and the ring is closed automatically if the first and
/// last vertex differ. Instances are immutable - the polygon is meant to be a constant region boundary.
/// The serialized format is the list of (lon,lat) vertex tuples
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(from = "Vec<(f64,f64)>", into = "Vec<(f64,f64)>")]
pub struct GeoPolygon(Polygon);

impl GeoPolygon {
    pub fn from_lon_lat_degrees (vertices: &[(f64,f64)]) -> Self {
        let coords: Vec<GeoCoord> = vertices.iter().map( |(lon,lat)| Coord{ x: *lon, y: *lat }).collect();
        GeoPolygon( Polygon::new( LineString::new( coords), Vec::with_capacity(0)))
    }

    pub fn as_exterior_geo_points (&self)->Vec<GeoPoint> {
        self.0.exterior().points().map(|p| GeoPoint(p)).collect()
    }

    pub fn exterior_coords_count(&self)->usize { self.0.exterior().coords_count() }

    /// point-in-polygon test based on ray casting: we cast a horizontal ray from the test point towards east
    /// and toggle the inside flag for each polygon edge it crosses.
    /// An edge counts if the point latitude is within (min_lat,max_lat] of the edge and the point is left
    /// of (or on) the edge intersection at that latitude. Horizontal edges can't be crossed and are skipped before we interpolate.
    /// Note that points exactly on the boundary are not guaranteed to be reported consistently.
    pub fn contains (&self, lon: f64, lat: f64)->bool {
        let mut inside = false;

        for line in self.0.exterior().lines() { // this includes the closing edge
            let (p1, p2) = (line.start, line.end);
            if p1.y == p2.y { continue } // horizontal

            let (y_min, y_max) = if p1.y < p2.y { (p1.y, p2.y) } else { (p2.y, p1.y) };
            if lat > y_min && lat <= y_max {
                let x_inters = (lat - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x;
                if lon <= x_inters {
                    inside = !inside;
                }
            }
        }

        inside
    }

    #[inline]
    pub fn contains_point (&self, p: &GeoPoint)->bool {
        self.contains( p.longitude_degrees(), p.latitude_degrees())
    }
}

impl From<Vec<(f64,f64)>> for GeoPolygon {
    fn from (vertices: Vec<(f64,f64)>)->Self { GeoPolygon::from_lon_lat_degrees( &vertices) }
}

impl From<GeoPolygon> for Vec<(f64,f64)> {
    fn from (poly: GeoPolygon)->Self {
        poly.0.exterior().coords().map( |c| (c.x, c.y)).collect()
    }
}

/* #endregion GeoPolygon */
