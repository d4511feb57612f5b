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

///! common utility functions for network operations

use std::{future::Future, time::Duration};
use reqwest::{header::{HeaderMap,HeaderValue,CONTENT_TYPE}, Client, StatusCode, Response};
use serde::{de::DeserializeOwned,Serialize};
use thiserror::Error;

#[derive(Error,Debug)]
pub enum OdinNetError {
    #[error("not found {0}")]
    NotFoundError(String),

    #[error("http error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("timeout after {0:?}: {1}")]
    TimeoutError(Duration,String),

    #[error("operation failed: {0}")]
    OpFailed(String),

    #[error("parse error: {0}")]
    ParseError(String)
}

pub type Result<T> = std::result::Result<T, OdinNetError>;

/// build a reqwest client with an optional connect timeout. Per-request timeouts are handled
/// by the functions of this module so that we can report which URL timed out
pub fn get_http_client (connect_timeout: Option<Duration>)->Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    Ok( builder.build()? )
}

/// run a request future bounded by `timeout`
pub async fn with_timeout<F,T> (timeout: Duration, url: &str, f: F)->Result<T> where F: Future<Output=Result<T>> {
    match tokio::time::timeout( timeout, f).await {
        Ok(res) => res,
        Err(_) => Err( OdinNetError::TimeoutError( timeout, url.to_string()))
    }
}

/// HTTP GET with URL query parameters, returning the deserialized JSON body of an OK response
pub async fn get_json_query<Q,U> (client: &Client, url: &str, query: &Q, timeout: Duration)->Result<U>
    where Q: Serialize + ?Sized, U: DeserializeOwned
{
    with_timeout( timeout, url, async {
        let response = client.get( url).query( query).send().await?;
        let response = check_status( response, url)?;
        from_json( response).await
    }).await
}

/// HTTP POST of a JSON payload (with optional URL query parameters). We only care about the response status
pub async fn post_json<Q,T> (client: &Client, url: &str, query: &Q, data: &T, timeout: Duration)->Result<StatusCode>
    where Q: Serialize + ?Sized, T: Serialize + ?Sized
{
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    with_timeout( timeout, url, async {
        let req = client.post( url)
            .headers( headers)
            .query( query)
            .json( data);

        let response = req.send().await?;
        let response = check_status( response, url)?;
        Ok::<StatusCode,OdinNetError>( response.status() )
    }).await
}

fn check_status (response: Response, url: &str)->Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else if status == StatusCode::NOT_FOUND {
        Err( OdinNetError::NotFoundError(url.to_string()))
    } else {
        Err( OdinNetError::OpFailed(format!("response status {status:?} for {url}")))
    }
}

pub async fn from_json<T> (response: Response)->Result<T> where T: DeserializeOwned {
    let bytes = response.bytes().await?;
    serde_json::from_slice( &bytes).map_err(|e| OdinNetError::ParseError(e.to_string()))
}
