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

use std::{sync::Arc, time::Duration};
use tokio::{task::JoinHandle, time::sleep};
use tokio_util::sync::CancellationToken;
use tracing::{info,error};

use crate::aggregator::FirmsAggregator;

/// runs an import cycle at startup and then every `interval` until it is shut down.
/// Shutdown only interrupts the wait between cycles. Running cycles are completed first, including
/// the ones that were started out of band through [`FirmsAggregator::spawn_cycle`]
pub struct LiveFirmsImporter {
    aggregator: Arc<FirmsAggregator>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl LiveFirmsImporter {
    pub fn start (aggregator: Arc<FirmsAggregator>, interval: Duration, cancel: CancellationToken)->Self {
        let task = tokio::spawn( run_import_schedule( aggregator.clone(), interval, cancel.clone()));
        LiveFirmsImporter { aggregator, cancel, task }
    }

    pub fn is_running (&self)->bool { !self.task.is_finished() }

    /// cancel the schedule and wait for the import task and pending background cycles to terminate
    pub async fn shutdown (self) {
        self.cancel.cancel();
        if let Err(e) = self.task.await {
            error!("FIRMS import task failed: {}", e);
        }
        self.aggregator.wait_for_background_cycles().await;
    }
}

async fn run_import_schedule (aggregator: Arc<FirmsAggregator>, interval: Duration, cancel: CancellationToken) {
    info!("starting FIRMS import with {:?} update interval", interval);

    loop {
        // errors are already logged by the aggregator, we just try again next time
        let _ = aggregator.run_cycle().await;

        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = sleep( interval) => {}
        }
    }

    info!("FIRMS import terminated");
}
