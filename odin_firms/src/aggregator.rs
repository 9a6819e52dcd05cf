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

use std::sync::Arc;
use chrono::{DateTime,Utc};
use futures::future::join_all;
use serde::Serialize;
use tokio::sync::Mutex;
use tokio_util::task::TaskTracker;
use tracing::{debug,info,warn,error};

use odin_common::{datetime::utc_now, geo::GeoPolygon};
use crate::{
    FireRecord, FirmsConfig, FirmsSource, errors::Result,
    firms_client::FireDataSource, parser::parse_records, snapshot::FireStore
};

#[derive(Debug,Clone,PartialEq,Serialize)]
pub enum SourceOutcome {
    Imported { n_parsed: usize, n_accepted: usize },
    Failed (String)
}

#[derive(Debug,Clone,Serialize)]
pub struct SourceReport {
    pub source: FirmsSource,
    pub outcome: SourceOutcome,
}

/// what happened during one import cycle
#[derive(Debug,Clone,Serialize)]
pub struct CycleReport {
    pub date: DateTime<Utc>,
    pub sources: Vec<SourceReport>,
}

impl CycleReport {
    /// number of records published by this cycle
    pub fn total (&self)->usize {
        self.sources.iter().map( |r| match r.outcome {
            SourceOutcome::Imported{n_accepted,..} => n_accepted,
            SourceOutcome::Failed(_) => 0
        }).sum()
    }

    pub fn accepted (&self, source: FirmsSource)->Option<usize> {
        self.sources.iter().find( |r| r.source == source).and_then( |r| match r.outcome {
            SourceOutcome::Imported{n_accepted,..} => Some(n_accepted),
            SourceOutcome::Failed(_) => None
        })
    }

    pub fn failed (&self, source: FirmsSource)->bool {
        self.sources.iter().any( |r| r.source == source && matches!( r.outcome, SourceOutcome::Failed(_)))
    }
}

/// retrieves all configured sources, keeps the records that lie within our region and publishes the
/// concatenated result (in source and row order) as the new snapshot of the [`FireStore`]
pub struct FirmsAggregator {
    data_source: Arc<dyn FireDataSource>,
    store: Arc<FireStore>,
    sources: Vec<FirmsSource>,
    days: u32,
    region: GeoPolygon,
    cycle_lock: Mutex<()>, // cycles must not interleave
    background: TaskTracker,
}

impl FirmsAggregator {
    pub fn new (config: &FirmsConfig, data_source: Arc<dyn FireDataSource>, store: Arc<FireStore>)->Self {
        FirmsAggregator {
            data_source,
            store,
            sources: config.sources.clone(),
            days: config.days,
            region: config.region_polygon(),
            cycle_lock: Mutex::new(()),
            background: TaskTracker::new()
        }
    }

    pub fn store (&self)->&Arc<FireStore> { &self.store }

    /// run a cycle without waiting for it. Pending background cycles are awaited by [`Self::wait_for_background_cycles`]
    pub fn spawn_cycle (self: &Arc<Self>) {
        let aggregator = self.clone();
        self.background.spawn( async move {
            let _ = aggregator.run_cycle().await; // failures are logged by run_cycle
        });
    }

    pub fn background_cycles (&self)->usize { self.background.len() }

    pub async fn wait_for_background_cycles (&self) {
        self.background.close();
        self.background.wait().await;
        self.background.reopen();
    }

    /// run one import cycle. Failing sources are reported but do not affect the others. If we don't
    /// have credentials the cycle is skipped and the previous snapshot stays current
    pub async fn run_cycle (&self)->Result<CycleReport> {
        let _guard = self.cycle_lock.lock().await;

        if let Err(e) = self.data_source.check_credentials() {
            error!("fire data update skipped: {}", e);
            return Err(e)
        }

        info!("updating fire data for {} sources, last {} days", self.sources.len(), self.days);
        let results = join_all( self.sources.iter().map( |source| self.import_source( *source))).await;

        let mut records: Vec<FireRecord> = Vec::new();
        let mut reports: Vec<SourceReport> = Vec::with_capacity( self.sources.len());

        for (source,res) in self.sources.iter().zip( results.into_iter()) {
            let outcome = match res {
                Ok((n_parsed, mut accepted)) => {
                    let n_accepted = accepted.len();
                    records.append( &mut accepted);
                    SourceOutcome::Imported { n_parsed, n_accepted }
                }
                Err(e) => {
                    warn!("{}: no data ({})", source, e);
                    SourceOutcome::Failed( e.to_string())
                }
            };
            reports.push( SourceReport { source: *source, outcome });
        }

        let date = utc_now();
        let report = CycleReport { date, sources: reports };
        self.store.publish( records, date);

        info!("fire data updated: {} detections", report.total());
        for r in &report.sources {
            if let SourceOutcome::Imported{n_accepted,..} = r.outcome {
                info!("  {}: {}", r.source, n_accepted);
            }
        }

        Ok(report)
    }

    async fn import_source (&self, source: FirmsSource)->Result<(usize,Vec<FireRecord>)> {
        let text = self.data_source.fetch( source, self.days).await?;
        let parsed = parse_records( &text);
        let n_parsed = parsed.len();

        let accepted: Vec<FireRecord> = parsed.into_iter()
            .filter( |rec| self.is_in_region(rec))
            .map( |mut rec| { rec.source = Some(source); rec })
            .collect();

        debug!("{}: {} of {} detections within region", source, accepted.len(), n_parsed);
        Ok( (n_parsed, accepted) )
    }

    fn is_in_region (&self, rec: &FireRecord)->bool {
        rec.position().is_some_and( |pos| self.region.contains_point( &pos))
    }
}
