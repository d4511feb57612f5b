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

//! the image resolution pipeline: slots -> geocode -> imagery search -> tile URL -> response

use std::sync::Arc;
use tracing::{debug, info, warn};

use odin_common::geo::GeoPoint;
use crate::{
    AlexaSkillConfig,
    attributes::SessionAttributes,
    errors::{Result, imagery_failure},
    event::Intent,
    filters::{CloudFilter, DateFilter, DateRange, Satellite, filter_description},
    geocoder::{City, Geocoder, first_located_feature},
    imagery::{ImageryCatalog, ImageryQuery, ImageryResult},
    response::SpeechletOptions,
    slots::ImageSlots,
    telemetry::{TelemetryEvent, TelemetrySink, notify},
    tiles::TileSpec,
};

pub const DEFAULT_TITLE: &'static str = "Satellite Imagery";
pub const ASK_FOR_LOCATION: &'static str = "Ask me about a specific location";

pub struct ImagePipeline {
    config: Arc<AlexaSkillConfig>,
    geocoder: Arc<dyn Geocoder>,
    catalog: Arc<dyn ImageryCatalog>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl ImagePipeline {
    pub fn new (config: Arc<AlexaSkillConfig>, geocoder: Arc<dyn Geocoder>, catalog: Arc<dyn ImageryCatalog>, telemetry: Arc<dyn TelemetrySink>)->Self {
        ImagePipeline { config, geocoder, catalog, telemetry }
    }

    /// resolve a `GetImageIntent`. Failures are turned into spoken apologies, this never returns an error
    pub async fn get_image_response (&self, request_id: &str, intent: &Intent)->(SessionAttributes,SpeechletOptions) {
        let slots = ImageSlots::from_intent( intent);
        let mut attrs = SessionAttributes::default();
        debug!("image slots: {:?}", slots);

        let city_text = match slots.required_city() {
            Ok(city_text) => city_text,
            Err(e) => {
                warn!("request {}: {}", request_id, e);
                return (attrs, missing_city_response())
            }
        };

        //--- geocode
        let (city, pos) = match self.geocode( city_text).await {
            Ok(located) => located,
            Err(e) => {
                if e.is_timeout() { warn!("geocoder timeout for {:?}", city_text) } else { warn!("geocoding {:?} failed: {}", city_text, e) }
                return (attrs, not_found_response( DEFAULT_TITLE, city_text))
            }
        };
        attrs.city = Some(city);
        let city_name = attrs.city_name().unwrap_or( city_text).to_string();
        let title = format!("{} Satellite Images", city_name);
        info!("resolved {:?} to {} at {}", city_text, city_name, pos);

        //--- search imagery
        let cloud_filter = CloudFilter::from_slots( &slots);
        let date_filter = DateFilter::from_slots( &slots, self.default_date_range());
        let satellite = Satellite::from_slots( &slots);
        let date_range = date_filter.date_range();
        debug!("imagery filters: clouds {:?}, dates {}, satellite {}", cloud_filter.cloud_range(), date_range, satellite);
        let query = ImageryQuery::new( pos, cloud_filter.cloud_range(), date_range, satellite);
        attrs.image_filter = filter_description( &cloud_filter, &date_filter);

        let scene = match self.search( &query).await {
            Ok(scene) => scene,
            Err(e) => {
                if e.is_timeout() { warn!("imagery search timeout for {}", city_name) } else { warn!("imagery search for {} failed: {}", city_name, e) }
                return (attrs, not_found_response( &title, &city_name))
            }
        };

        //--- derive tile URL
        let tile_image = TileSpec::from_slots( &slots).tile_image( &self.config.tiler, &pos, &scene);
        debug!("tile image: {:?}", tile_image);

        attrs.image = Some(scene);
        attrs.image_url = Some(tile_image.url);
        attrs.image_source = Some(tile_image.source.to_string());
        attrs.image_date = Some(tile_image.date);
        attrs.tile_type = Some( tile_image.tile_type.unwrap_or_default().to_string());
        attrs.request_id = Some(request_id.to_string());
        info!("session attributes: {:?}", attrs);

        let output = image_output( tile_image.tile_type, &city_name);
        let options = SpeechletOptions::new( title, output);

        //--- report (awaited, but the outcome does not change the response)
        match TelemetryEvent::session_data( &attrs) {
            Ok(event) => notify( self.telemetry.as_ref(), event).await,
            Err(e) => warn!("failed to create session-data event: {}", e)
        }

        (attrs, options)
    }

    async fn geocode (&self, city_text: &str)->Result<(City,GeoPoint)> {
        let features = self.geocoder.geocode_forward( city_text).await?;
        let (feature, pos) = first_located_feature( city_text, features)?;
        Ok( (feature.to_city( city_text)?, pos) )
    }

    async fn search (&self, query: &ImageryQuery)->Result<ImageryResult> {
        self.catalog.search( query).await?
            .into_iter()
            .next()
            .ok_or_else( || imagery_failure( format!("no results for {:?}", query)))
    }

    fn default_date_range (&self)->DateRange {
        let imagery = &self.config.imagery;
        DateRange::new( imagery.default_date_from, imagery.default_date_to)
            .unwrap_or( DateRange { from: imagery.default_date_to, to: imagery.default_date_from })
    }
}

pub fn image_output (tile_type: Option<&str>, city_name: &str)->String {
    match tile_type {
        Some(tile_type) => format!("I have a {} image for {}. Processing the image now", tile_type, city_name),
        None => format!("I have an image for {}. Processing the image now", city_name)
    }
}

/// the place was given but we could not resolve it or did not find a scene
pub fn not_found_response (title: &str, city_name: &str)->SpeechletOptions {
    SpeechletOptions::new( title, format!("I'm sorry, I didn't find any matching images for {}", city_name))
}

/// there was no place given at all
pub fn missing_city_response ()->SpeechletOptions {
    SpeechletOptions::new( DEFAULT_TITLE, "I'm sorry, I didn't catch which place you want to look at")
        .with_reprompt( ASK_FOR_LOCATION)
}
