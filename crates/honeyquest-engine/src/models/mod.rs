//! Wire-format data model shared with the backend.
//!
//! These types mirror the query database document format and the REST API
//! payloads. The engine owns them so that both the policy (annotations) and
//! the API client (requests and responses) speak the same shapes.

pub mod answer;
pub mod profile;
pub mod query;

pub use answer::{Answer, Feedback, FeedbackAnswer, LineAnswer, QueryResponse, iso8601_duration};
pub use profile::{Profile, ProfileJob, ProfileRank};
pub use query::{
    Metadata, MetadataClassification, Query, QueryBucket, QueryBucketStrategy,
    QueryBucketsWrapper, QueryLabel, QueryWrapper,
};
