//! Data models for the Maglinc site backend.
//!
//! Field names are snake_case on the wire, matching the site frontend.

mod blog_post;
mod case_study;
mod lead;
mod member;
mod resource;
mod schema;
mod service;
mod stats;
mod testimonial;
pub mod timestamp;

pub use blog_post::*;
pub use case_study::*;
pub use lead::*;
pub use member::*;
pub use resource::*;
pub use schema::*;
pub use service::*;
pub use stats::*;
pub use testimonial::*;

use serde::Serialize;

use crate::db::Collection;

/// Fresh record identifier. Also fills in stored documents that lack one.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// An entity kind that can be listed from its collection.
pub trait Entity: Schema + Serialize + Send + 'static {
    const COLLECTION: Collection;

    /// Maximum number of documents fetched per read.
    const READ_LIMIT: usize = 100;

    /// Sample records returned in place of an empty collection.
    fn fallback() -> Option<Vec<Self>> {
        None
    }
}
