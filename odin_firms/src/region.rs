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

//! the default region of interest: the Brazilian Legal Amazon

use lazy_static::lazy_static;
use odin_common::geo::GeoPolygon;

/// simplified Legal Amazon boundary as (longitude,latitude) degrees, closed.
/// The vertices keep a small inward margin from the international borders
pub const LEGAL_AMAZON_VERTICES: [(f64,f64); 35] = [
    (-73.75, -7.35),  // Acre - Peru border
    (-73.50, -5.00),
    (-73.00, -2.50),
    (-72.50, -0.50),
    (-70.50,  0.00),  // Amazonas - Colombia
    (-69.50,  1.00),
    (-69.40,  2.00),
    (-64.83,  2.24),  // Roraima - Venezuela
    (-60.24,  5.27),
    (-59.80,  4.50),  // Roraima - Guyana
    (-51.65,  4.45),  // Amapá - French Guiana
    (-50.39,  1.80),
    (-49.97,  1.70),  // Atlantic coast
    (-48.48,  1.68),
    (-44.21, -1.30),  // Maranhão
    (-44.00, -2.80),
    (-44.36, -6.00),
    (-44.70, -9.00),
    (-46.05, -10.96), // Tocantins
    (-46.87, -12.47),
    (-50.09, -13.84), // Mato Grosso
    (-51.09, -14.48),
    (-52.50, -15.40),
    (-56.09, -17.00),
    (-57.50, -16.00), // Mato Grosso - Bolivia
    (-59.43, -15.42),
    (-60.11, -13.69),
    (-64.50, -12.56), // Rondônia - Bolivia
    (-65.00, -11.01),
    (-66.50, -10.85),
    (-68.50, -11.15), // Acre - Bolivia
    (-69.40, -10.95),
    (-70.00, -9.49),  // Acre - Peru
    (-72.50, -9.08),
    (-73.75, -7.35),
];

lazy_static! {
    static ref LEGAL_AMAZON: GeoPolygon = GeoPolygon::from_lon_lat_degrees( &LEGAL_AMAZON_VERTICES);
}

pub fn legal_amazon ()->GeoPolygon {
    LEGAL_AMAZON.clone()
}

#[inline]
pub fn is_in_legal_amazon (lon: f64, lat: f64)->bool {
    LEGAL_AMAZON.contains( lon, lat)
}
