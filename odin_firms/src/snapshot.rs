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

use std::sync::{Arc,RwLock};
use chrono::{DateTime,Utc};
use serde::Serialize;

use crate::FireRecord;

/// the immutable result of an import cycle
#[derive(Debug,Default,Serialize)]
pub struct FireSnapshot {
    pub records: Vec<FireRecord>,
    pub last_update: Option<DateTime<Utc>>, // None if we never had a successful import
}

impl FireSnapshot {
    pub fn is_populated (&self)->bool { self.last_update.is_some() }
}

/// the shared store for the current [`FireSnapshot`]. Snapshots are replaced as a whole, readers
/// get the `Arc` of the snapshot that was current at the time of the call and never see partial updates
#[derive(Debug,Default)]
pub struct FireStore {
    current: RwLock<Arc<FireSnapshot>>
}

impl FireStore {
    pub fn new ()->Self { FireStore::default() }

    pub fn publish (&self, records: Vec<FireRecord>, last_update: DateTime<Utc>) {
        let snapshot = Arc::new( FireSnapshot { records, last_update: Some(last_update) });
        let mut current = self.current.write().unwrap_or_else( |e| e.into_inner());
        *current = snapshot;
    }

    pub fn current (&self)->Arc<FireSnapshot> {
        self.current.read().unwrap_or_else( |e| e.into_inner()).clone()
    }
}
