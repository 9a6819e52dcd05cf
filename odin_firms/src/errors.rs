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

use thiserror::Error;
use odin_common::net::OdinNetError;

pub type Result<T> = std::result::Result<T, OdinFirmsError>;
 
#[derive(Error,Debug)]
pub enum OdinFirmsError {

   #[error("no FIRMS map key configured (set 'map_key' or NASA_API_KEY)")]
   MissingCredential,

   #[error("fire data not yet available")]
   Unavailable,

   #[error("net error {0}")]
   NetError( #[from] OdinNetError),

   #[error("config error {0}")]
   ConfigError( String ),

   #[error("RON error {0}")]
   RonError( #[from] ron::error::SpannedError),

   #[error("IO error {0}")]
   IOError( #[from] std::io::Error),
}

macro_rules! config_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        OdinFirmsError::ConfigError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use config_error;
