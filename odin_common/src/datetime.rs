/*
 * Copyright © 2024, United States Government, as represented by the Administrator of 
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

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize,Serializer,Deserializer};
use std::time::Duration;
use parse_duration::parse;
use crate::if_let;

// simple Duration ctors so that we don't depend on experimental std Duration features
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }
#[inline] pub fn minutes (n: u64)->Duration { Duration::from_secs(n * 60) }

/// this should be used wherever we might have to use sim clock instead of wall clock
#[inline]
pub fn utc_now()->DateTime<Utc> {
    Utc::now()
}

/// the point in time `n_hours` before `now`, saturating at the earliest representable DateTime
pub fn hours_before (now: DateTime<Utc>, n_hours: i64)->DateTime<Utc> {
    TimeDelta::try_hours(n_hours)
        .and_then( |d| now.checked_sub_signed(d))
        .unwrap_or( DateTime::<Utc>::MIN_UTC)
}

/// combine a `%Y-%m-%d` date spec with a `HHMM` time-of-day spec into a UTC DateTime.
/// The time spec has to have exactly 4 digits, i.e. "0036" is 00:36 and "36" is rejected.
/// This is the format in which satellite products report their acquisition times.
pub fn parse_date_hhmm (date: &str, hhmm: &str)->Option<DateTime<Utc>> {
    if_let! {
        Ok(nd) = NaiveDate::parse_from_str( date.trim(), "%Y-%m-%d"),
        true = { is_hhmm_spec(hhmm) } else { return None },
        Ok(n) = hhmm.trim().parse::<u32>(),
        Some(nt) = NaiveTime::from_hms_opt( n/100, n%100, 0) => {
            return Some( NaiveDateTime::new(nd,nt).and_utc() )
        }
    }
    None
}

fn is_hhmm_spec (s: &str)->bool {
    let s = s.trim();
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}

//--- support for serde

pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}

pub fn serialize_duration<S: Serializer> (dur: &Duration, s: S) -> Result<S::Ok, S::Error>  {
    let dfm = format!("{:?}", dur);
    s.serialize_str(&dfm)
}
