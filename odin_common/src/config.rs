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

//! RON config file lookup and loading
//!
//! configs are looked up in this order:
//!   1. `$ODIN_HOME/configs/<crate>/<filename>`
//!   2. `$HOME/.odin/configs/<crate>/<filename>`
//!   3. `<crate-manifest-dir>/configs/<filename>` (the in-repo default)

use std::{env, fs, path::{Path,PathBuf}};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const CONFIGS: &'static str = "configs";

#[derive(Error,Debug)]
pub enum OdinConfigError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config RON error {0}")]
    RonError( #[from] ron::error::SpannedError),

    #[error("config not found: {0}")]
    NotFoundError(String)
}

pub type Result<T> = std::result::Result<T, OdinConfigError>;

/// load a RON config from an explicit path
pub fn load_config_path<C,P> (path: P)->Result<C> where C: DeserializeOwned, P: AsRef<Path> {
    let data = fs::read( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

pub fn find_config_file (resource_crate: &str, manifest_dir: &str, filename: &str)->Option<PathBuf> {
    if let Ok(odin_home) = env::var("ODIN_HOME") {
        let path = Path::new( odin_home.as_str()).join( CONFIGS).join( resource_crate).join( filename);
        if path.is_file() { return Some(path) }
    }

    if let Ok(usr_home) = env::var("HOME") {
        let path = Path::new( usr_home.as_str()).join(".odin").join( CONFIGS).join( resource_crate).join( filename);
        if path.is_file() { return Some(path) }
    }

    let path = Path::new( manifest_dir).join( CONFIGS).join( filename);
    if path.is_file() { Some(path) } else { None }
}

/// the runtime part of crate config lookup. Use the `define_load_config!{}` macro to get a crate specific `load_config(filename)`
pub fn load_crate_config<C> (resource_crate: &str, manifest_dir: &str, filename: &str)->Result<C> where C: DeserializeOwned {
    // explicit paths bypass the lookup
    let fpath = Path::new(filename);
    if fpath.components().count() > 1 && fpath.is_file() {
        return load_config_path( fpath)
    }

    match find_config_file( resource_crate, manifest_dir, filename) {
        Some(path) => load_config_path( &path),
        None => Err( OdinConfigError::NotFoundError( filename.to_string()))
    }
}

/// expand at the top of crates (lib.rs) that define configs. Config users call the defined
/// `load_config(..)` function to instantiate config structs
#[macro_export]
macro_rules! define_load_config {
    () => {
        /// load config using the odin_common lookup mechanism for this crate
        pub fn load_config<C> (filename: &str)->odin_common::config::Result<C> where C: serde::de::DeserializeOwned {
            odin_common::config::load_crate_config( env!("CARGO_PKG_NAME"), env!("CARGO_MANIFEST_DIR"), filename)
        }
    }
}
