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

//! normalization of the date values the voice platform produces for date slots.
//!
//! Supported formats are `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `YYYY-Www` (ISO week), `YYYY-Www-WE` (weekend of that week),
//! `YYYY-SP|SU|FA|WI` (seasons) and `YYYX` (decade). Anything else (e.g. `PRESENT_REF`) is not parsed.

use chrono::{NaiveDate,Weekday};
use lazy_static::lazy_static;
use regex::Regex;

use odin_common::datetime::{last_day_of_month, month_name, spoken_date};
use crate::filters::DateRange;

lazy_static! {
    static ref DATE_RE: Regex = Regex::new( 
        r"^(\d{3})(\d|X)(?:-(?:(\d{2})(?:-(\d{2}))?|W(\d{1,2})(-WE)?|(SP|SU|FA|WI)))?$"
    ).unwrap();
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Season { Spring, Summer, Fall, Winter }

impl Season {
    fn from_code (code: &str)->Option<Season> {
        match code {
            "SP" => Some(Season::Spring),
            "SU" => Some(Season::Summer),
            "FA" => Some(Season::Fall),
            "WI" => Some(Season::Winter),
            _ => None
        }
    }

    pub fn name (&self)->&'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    /// (first month, last month, year offset of last month). Winter extends into the next year
    fn months (&self)->(u32,u32,i32) {
        match self {
            Season::Spring => (3,5,0),
            Season::Summer => (6,8,0),
            Season::Fall => (9,11,0),
            Season::Winter => (12,2,1),
        }
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum DatePrecision {
    Decade,
    Year,
    Season(Season),
    Month,
    Week(u32),
    Weekend(u32),
    Day,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct ParsedDate {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub precision: DatePrecision,
}

pub fn parse_date (text: &str)->Option<ParsedDate> {
    let caps = DATE_RE.captures( text.trim())?;
    let decade: i32 = caps[1].parse().ok()?;

    if &caps[2] == "X" {
        if (3..caps.len()).any( |i| caps.get(i).is_some()) { return None } // no suffixes for decades
        return Some( ParsedDate { year: decade * 10, month: None, day: None, precision: DatePrecision::Decade })
    }
    let year = decade * 10 + caps[2].parse::<i32>().ok()?;

    if let Some(m) = caps.get(3) {
        let month: u32 = m.as_str().parse().ok()?;
        if let Some(d) = caps.get(4) {
            let day: u32 = d.as_str().parse().ok()?;
            NaiveDate::from_ymd_opt( year, month, day)?;
            return Some( ParsedDate { year, month: Some(month), day: Some(day), precision: DatePrecision::Day })
        }
        month_name( month)?;
        return Some( ParsedDate { year, month: Some(month), day: None, precision: DatePrecision::Month })
    }

    if let Some(w) = caps.get(5) {
        let week: u32 = w.as_str().parse().ok()?;
        NaiveDate::from_isoywd_opt( year, week, Weekday::Mon)?;
        let precision = if caps.get(6).is_some() { DatePrecision::Weekend(week) } else { DatePrecision::Week(week) };
        return Some( ParsedDate { year, month: None, day: None, precision })
    }

    if let Some(s) = caps.get(7) {
        let season = Season::from_code( s.as_str())?;
        return Some( ParsedDate { year, month: None, day: None, precision: DatePrecision::Season(season) })
    }

    Some( ParsedDate { year, month: None, day: None, precision: DatePrecision::Year })
}

impl ParsedDate {
    /// the inclusive date range covered by this date
    pub fn date_range (&self)->Option<DateRange> {
        let year = self.year;
        let (from, to) = match self.precision {
            DatePrecision::Decade => (ymd( year, 1, 1)?, ymd( year + 9, 12, 31)?),
            DatePrecision::Year => (ymd( year, 1, 1)?, ymd( year, 12, 31)?),
            DatePrecision::Season(season) => {
                let (m0, m1, dy) = season.months();
                (ymd( year, m0, 1)?, last_day_of_month( year + dy, m1)?)
            }
            DatePrecision::Month => {
                let month = self.month?;
                (ymd( year, month, 1)?, last_day_of_month( year, month)?)
            }
            DatePrecision::Week(week) => {
                (NaiveDate::from_isoywd_opt( year, week, Weekday::Mon)?, NaiveDate::from_isoywd_opt( year, week, Weekday::Sun)?)
            }
            DatePrecision::Weekend(week) => {
                (NaiveDate::from_isoywd_opt( year, week, Weekday::Sat)?, NaiveDate::from_isoywd_opt( year, week, Weekday::Sun)?)
            }
            DatePrecision::Day => {
                let d = ymd( year, self.month?, self.day?)?;
                (d, d)
            }
        };
        DateRange::new( from, to)
    }

    /// how we speak this date, e.g. "June 2017" or "summer 2017"
    pub fn description (&self)->String {
        match self.precision {
            DatePrecision::Decade => format!("the {}s", self.year),
            DatePrecision::Year => self.year.to_string(),
            DatePrecision::Season(season) => format!("{} {}", season.name(), self.year),
            DatePrecision::Month => format!("{} {}", self.month.and_then( month_name).unwrap_or_default(), self.year),
            DatePrecision::Week(week) => format!("week {} of {}", week, self.year),
            DatePrecision::Weekend(week) => format!("the weekend of week {} of {}", week, self.year),
            DatePrecision::Day => {
                match (self.month, self.day) {
                    (Some(m),Some(d)) => ymd( self.year, m, d).map( |date| spoken_date(&date)).unwrap_or_else( || self.year.to_string()),
                    _ => self.year.to_string()
                }
            }
        }
    }
}

#[inline]
fn ymd (year: i32, month: u32, day: u32)->Option<NaiveDate> {
    NaiveDate::from_ymd_opt( year, month, day)
}
