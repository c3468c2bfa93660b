//! Client for the HERE Search REST API: discover, geocode, autosuggest,
//! browse, lookup and reverse geocode.
//!
//! ```no_run
//! use here_search::{HereApi, Position};
//!
//! # async fn run() -> here_search::Result<()> {
//! let api = HereApi::new("YOUR_API_KEY");
//! let items = api.geocode("5 Rue Daunou, 75002 Paris, France").await?;
//! let nearby = api.browse(Position::new(48.86926, 2.3321), 5, &["100-1000"]).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::http::ReqwestTransport;
pub use config::ClientConfig;
pub use core::{api::HereApi, request::Endpoints};
pub use domain::model::{
    Address, ApiErrorBody, Category, Contact, ContactItem, FoodType, Item, ItemsResponse, MapView,
    OpeningHours, Position, Reference, Structured, Supplier,
};
pub use domain::ports::{RawResponse, Transport};
pub use utils::error::{HereError, Result};
