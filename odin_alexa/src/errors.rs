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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OdinAlexaError>;

#[derive(Error,Debug)]
pub enum OdinAlexaError {
    #[error("invalid application id {0}")]
    InvalidApplication(String),

    #[error("unrecognized request type {0}")]
    UnrecognizedRequestType(String),

    #[error("invalid intent {0}")]
    InvalidIntent(String),

    #[error("missing slot {0}")]
    MissingSlot(String),

    #[error("geocode failure {0}")]
    GeocodeFailure(String),

    #[error("imagery search failure {0}")]
    ImagerySearchFailure(String),

    #[error("telemetry failure {0}")]
    TelemetryFailure(String),

    #[error("net error {0}")]
    NetError( #[from] odin_common::net::OdinNetError),

    #[error("config error {0}")]
    ConfigError( #[from] odin_common::config::OdinConfigError),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("URL error {0}")]
    UrlError( #[from] url::ParseError),

    #[error("operation failed {0}")]
    OpFailed(String)
}

impl OdinAlexaError {
    /// errors that are reported to the calling platform instead of being turned into a spoken response
    pub fn is_structural (&self)->bool {
        matches!( self, 
            OdinAlexaError::InvalidApplication(_) | 
            OdinAlexaError::UnrecognizedRequestType(_) | 
            OdinAlexaError::InvalidIntent(_)
        )
    }

    pub fn is_timeout (&self)->bool {
        matches!( self, OdinAlexaError::NetError( odin_common::net::OdinNetError::TimeoutError(..)))
    }
}

pub fn geocode_failure (msg: impl ToString)->OdinAlexaError {
    OdinAlexaError::GeocodeFailure(msg.to_string())
}

pub fn imagery_failure (msg: impl ToString)->OdinAlexaError {
    OdinAlexaError::ImagerySearchFailure(msg.to_string())
}

pub fn telemetry_failure (msg: impl ToString)->OdinAlexaError {
    OdinAlexaError::TelemetryFailure(msg.to_string())
}

pub fn op_failed (msg: impl ToString)->OdinAlexaError {
    OdinAlexaError::OpFailed(msg.to_string())
}

#[macro_export]
macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::op_failed( format!( $fmt $(, $arg)* ))
    };
}
