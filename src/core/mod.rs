pub mod api;
pub mod decode;
pub mod request;

pub use crate::domain::model::{Item, Position};
pub use crate::domain::ports::{RawResponse, Transport};
pub use crate::utils::error::Result;
