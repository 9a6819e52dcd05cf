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

//! shared fixtures for odin_firms tests

use std::{collections::HashMap, sync::{Arc, atomic::{AtomicUsize, Ordering}}, time::Duration};
use async_trait::async_trait;
use odin_common::net::OdinNetError;
use odin_firms::{
    FireRecord, FirmsConfig, FirmsSource, OdinFirmsError, Result,
    aggregator::FirmsAggregator, firms_client::FireDataSource, snapshot::FireStore
};

pub const MODIS_HEADER: &str = "latitude,longitude,brightness,scan,track,acq_date,acq_time,satellite,instrument,confidence,version,bright_t31,frp,daynight";
pub const VIIRS_HEADER: &str = "latitude,longitude,bright_ti4,scan,track,acq_date,acq_time,satellite,instrument,confidence,version,bright_ti5,frp,daynight";

pub const MANAUS_ROW: &str = "-3.1190,-60.0217,320.5,1.0,1.0,2024-09-01,1705,Terra,MODIS,85,6.1NRT,295.3,12.4,D";
pub const LIMA_ROW: &str = "-12.0464,-77.0428,310.2,1.1,1.0,2024-09-01,1705,Terra,MODIS,70,6.1NRT,290.0,8.0,D";
pub const BAD_LAT_ROW: &str = "abc,-60.0217,320.5,1.0,1.0,2024-09-01,1705,Terra,MODIS,85,6.1NRT,295.3,12.4,D";
pub const BELEM_ROW: &str = "-1.4558,-48.5044,330.1,0.4,0.4,2024-09-01,0436,N,VIIRS,n,2.0NRT,290.5,3.2,N";
pub const PORTO_VELHO_ROW: &str = "-8.7612,-63.9004,340.0,0.5,0.4,2024-09-01,1712,N21,VIIRS,h,2.0NRT,291.0,20.5,D";

pub fn csv (header: &str, rows: &[&str])->String {
    let mut s = header.to_string();
    for row in rows {
        s.push('\n');
        s.push_str(row);
    }
    s
}

/// a FireDataSource that returns canned responses (or errors) per source and counts fetches
pub struct MockSource {
    pub responses: HashMap<FirmsSource, std::result::Result<String,Duration>>,
    pub has_credentials: bool,
    pub delay: Option<Duration>,
    pub n_fetches: AtomicUsize,
}

impl MockSource {
    pub fn new (has_credentials: bool)->Self {
        MockSource { responses: HashMap::new(), has_credentials, delay: None, n_fetches: AtomicUsize::new(0) }
    }

    pub fn with_data (mut self, source: FirmsSource, text: String)->Self {
        self.responses.insert( source, Ok(text));
        self
    }

    /// fetches of this source time out
    pub fn with_timeout (mut self, source: FirmsSource)->Self {
        self.responses.insert( source, Err(Duration::from_secs(60)));
        self
    }

    /// every fetch takes at least this long
    pub fn with_delay (mut self, delay: Duration)->Self {
        self.delay = Some(delay);
        self
    }

    pub fn fetches (&self)->usize { self.n_fetches.load( Ordering::SeqCst) }
}

#[async_trait]
impl FireDataSource for MockSource {
    fn check_credentials (&self)->Result<()> {
        if self.has_credentials { Ok(()) } else { Err( OdinFirmsError::MissingCredential) }
    }

    async fn fetch (&self, source: FirmsSource, _days: u32)->Result<String> {
        if let Some(delay) = self.delay { tokio::time::sleep( delay).await }
        self.n_fetches.fetch_add( 1, Ordering::SeqCst);
        match self.responses.get( &source) {
            Some(Ok(text)) => Ok( text.clone()),
            Some(Err(dur)) => Err( OdinFirmsError::NetError( OdinNetError::TimeoutError(*dur))),
            None => Ok( String::new())
        }
    }
}

/// one source per product with MODIS containing an out-of-region and an invalid row, and a failing NOAA-20
pub fn mixed_source ()->MockSource {
    MockSource::new( true)
        .with_data( FirmsSource::ModisNrt, csv( MODIS_HEADER, &[MANAUS_ROW, LIMA_ROW, BAD_LAT_ROW]))
        .with_data( FirmsSource::ViirsSnppNrt, csv( VIIRS_HEADER, &[BELEM_ROW]))
        .with_timeout( FirmsSource::ViirsNoaa20Nrt)
        .with_data( FirmsSource::ViirsNoaa21Nrt, csv( VIIRS_HEADER, &[PORTO_VELHO_ROW]))
}

pub fn aggregator_for (source: Arc<MockSource>)->Arc<FirmsAggregator> {
    let store = Arc::new( FireStore::new());
    Arc::new( FirmsAggregator::new( &FirmsConfig::default(), source, store))
}

pub fn record (source: FirmsSource, confidence: i64, frp: f64, daynight: &str)->FireRecord {
    FireRecord {
        latitude: Some(-3.119),
        longitude: Some(-60.0217),
        confidence,
        frp,
        daynight: daynight.to_string(),
        source: Some(source),
        ..FireRecord::default()
    }
}
