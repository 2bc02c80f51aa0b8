//! The host directory: descriptors for known paste instances and a
//! filter that selects candidates by expiry and feature support.

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Expiry tokens a paste service may advertise support for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expiry {
    #[serde(rename = "1hour")]
    OneHour,
    #[serde(rename = "1day")]
    OneDay,
    #[serde(rename = "1week")]
    OneWeek,
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "1year")]
    OneYear,
    Never,
}

impl Expiry {
    /// Parses a CLI-style token (`"1week"`, `"never"`, ...).
    pub fn parse(token: &str) -> Option<Self> {
        Some(match token {
            "1hour" | "hour" => Expiry::OneHour,
            "1day" | "day" => Expiry::OneDay,
            "1week" | "week" => Expiry::OneWeek,
            "1month" | "month" => Expiry::OneMonth,
            "1year" | "year" => Expiry::OneYear,
            "never" => Expiry::Never,
            _ => return None,
        })
    }

    /// The wire token sent in the `meta.expire` field.
    pub fn as_wire_token(&self) -> &'static str {
        match self {
            Expiry::OneHour => "1hour",
            Expiry::OneDay => "1day",
            Expiry::OneWeek => "1week",
            Expiry::OneMonth => "1month",
            Expiry::OneYear => "1year",
            Expiry::Never => "never",
        }
    }
}

impl Default for Expiry {
    fn default() -> Self {
        Expiry::OneWeek
    }
}

/// Optional capabilities a paste service may advertise support for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Burn,
    Discussion,
    UploadFile,
    ShortenUrl,
}

/// A single known paste instance and what it supports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostDescriptor {
    pub base_url: String,
    pub expiries: HashSet<Expiry>,
    pub features: HashSet<Feature>,
}

impl HostDescriptor {
    pub fn new(
        base_url: impl Into<String>,
        expiries: impl IntoIterator<Item = Expiry>,
        features: impl IntoIterator<Item = Feature>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            expiries: expiries.into_iter().collect(),
            features: features.into_iter().collect(),
        }
    }

    fn supports(&self, expiry: Expiry, required_features: &[Feature]) -> bool {
        self.expiries.contains(&expiry)
            && required_features.iter().all(|f| self.features.contains(f))
    }
}

/// An immutable, process-wide index of known host descriptors.
#[derive(Debug, Clone)]
pub struct HostDirectory {
    hosts: Vec<HostDescriptor>,
}

impl HostDirectory {
    /// Builds a directory from a list of descriptors, de-duplicating by
    /// base URL (first occurrence wins).
    pub fn new(hosts: Vec<HostDescriptor>) -> Self {
        let mut seen = HashSet::new();
        let deduped = hosts
            .into_iter()
            .filter(|h| seen.insert(h.base_url.clone()))
            .collect();
        Self { hosts: deduped }
    }

    /// The compiled-in directory shared by the whole process.
    pub fn compiled_in() -> &'static HostDirectory {
        use std::sync::OnceLock;
        static DIRECTORY: OnceLock<HostDirectory> = OnceLock::new();
        DIRECTORY.get_or_init(|| HostDirectory::new(crate::hosts::table::compiled_hosts()))
    }

    /// Returns every host supporting the given expiry and feature set,
    /// in a freshly shuffled order.
    pub fn filter(&self, expiry: Expiry, required_features: &[Feature]) -> Vec<HostDescriptor> {
        let mut matching: Vec<HostDescriptor> = self
            .hosts
            .iter()
            .filter(|h| h.supports(expiry, required_features))
            .cloned()
            .collect();

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let mut rng = StdRng::seed_from_u64(seed);
        matching.shuffle(&mut rng);
        matching
    }

    /// Total number of known hosts, for diagnostics and tests.
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}
