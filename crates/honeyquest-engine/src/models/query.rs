use serde::{Deserialize, Serialize};

use crate::annotation::AnnotationBag;
use crate::policy::QueryRules;

/// The true label of a query. Tutorial and filler queries carry no label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryLabel {
    Neutral,
    Risky,
    Deceptive,
}

/// One query as served by the backend: a multi-line payload plus ordered
/// reference and annotation maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub id: String,
    pub label: Option<QueryLabel>,
    #[serde(rename = "type")]
    pub query_type: String,
    #[serde(default)]
    pub references: AnnotationBag,
    #[serde(default)]
    pub annotations: AnnotationBag,
    /// The raw multi-line text to display
    pub data: String,
}

impl Query {
    /// The payload lines in display order. Line numbers shown to the user
    /// are 1-based indices into this sequence.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.data.lines()
    }

    /// Assemble the interaction rules from this query's annotations.
    pub fn rules(&self) -> QueryRules {
        QueryRules::from_annotations(&self.annotations)
    }

    pub fn is_tutorial(&self) -> bool {
        self.query_type == "tutorial"
    }

    /// The metadata entry referenced by this query, if any.
    pub fn metadata_ref(&self) -> Option<String> {
        self.references.get_str("metaref")
    }
}

/// A query along with the state of the user's session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryWrapper {
    pub query: Query,
    /// The number of queries answered by the user
    pub answered_queries: u32,
    /// The total number of queries in the dataset
    pub total_queries: u32,
}

/// Sampling strategy of a query bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryBucketStrategy {
    Sorted,
    Random,
}

/// A collection of queries that are presented to the user at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryBucket {
    pub name: String,
    pub description: String,
    pub strategy: QueryBucketStrategy,
    pub query_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryBucketsWrapper {
    /// A list of buckets, or null if no bucket order was specified
    pub buckets: Option<Vec<QueryBucket>>,
}

/// Classification of a metadata entry according to security ontologies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataClassification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwe: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capec: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owasp: Option<Vec<String>>,
}

/// Background material referenced by queries via `metaref`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default)]
    pub classification: MetadataClassification,
    pub text: String,
}
