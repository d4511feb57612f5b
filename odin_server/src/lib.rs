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

use std::{net::SocketAddr, path::PathBuf};

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use serde::{Deserialize,Serialize};
use tokio::task::JoinHandle;
use tracing::info;

use odin_common::strings;

pub mod errors;
pub use errors::{OdinServerError,OdinServerResult,op_failed};

type Result<T> = OdinServerResult<T>;

#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct ServerConfig {
    pub sock_addr: SocketAddr,
    pub tls: Option<TlsConfig>, // if set use TLS (https)
}

impl ServerConfig {
    pub fn url(&self) -> String {
        let proto = if self.tls.is_some() {"https"} else {"http"};
        format!("{}://{}", proto, self.sock_addr)
    }
}

/// paths can contain ${VAR} references that are expanded from the process environment
#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct TlsConfig {
    pub cert_path: String, // path to PEM encoded certificate
    pub key_path: String,  // path to PEM encoded key data
}

/// run the axum server for `router` as a tokio task. The task only terminates if the server fails
pub fn spawn_server_task (config: &ServerConfig, router: Router) -> JoinHandle<Result<()>> {
    let sock_addr = config.sock_addr.clone();
    let router_svc = router.into_make_service_with_connect_info::<SocketAddr>();

    if let Some(tls) = &config.tls {
        let cert_path = strings::env_expand( &tls.cert_path);
        let key_path = strings::env_expand( &tls.key_path);
        tokio::spawn( async move {
            if strings::has_unexpanded_vars( &cert_path) || strings::has_unexpanded_vars( &key_path) {
                return Err( op_failed( format!("unresolved TLS paths: {} {}", cert_path, key_path)))
            }
            let tls_config = RustlsConfig::from_pem_file(PathBuf::from(cert_path), PathBuf::from(key_path)).await?;
            info!("serving https://{}", sock_addr);
            axum_server::bind_rustls( sock_addr, tls_config).serve( router_svc).await?;
            Ok::<(),OdinServerError>(())
        })
    } else {
        tokio::spawn( async move {
            let listener = tokio::net::TcpListener::bind(sock_addr).await?;
            info!("serving http://{}", sock_addr);
            axum::serve( listener, router_svc).await?;
            Ok::<(),OdinServerError>(())
        })
    }
}
