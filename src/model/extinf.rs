use anyhow::Result;
use std::mem;

use crate::parsers;

/// Metadata carried by an `#EXTINF:<duration>,<title>` directive.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExtInf {
    pub duration: Option<u64>, // in seconds, `None` if unknown
    pub title: Option<String>,
}

/// Metadata waiting for the next location line.
#[derive(Debug, Default)]
pub enum PendingMetadata {
    #[default]
    Empty,
    Pending(ExtInf),
}

impl TryFrom<&str> for ExtInf {
    type Error = anyhow::Error;

    fn try_from(line: &str) -> Result<Self> {
        parsers::extinf::parse(line)
    }
}

impl PendingMetadata {
    /// A later directive replaces one that never reached an entry.
    pub fn set(&mut self, metadata: ExtInf) {
        *self = Self::Pending(metadata);
    }

    pub fn take(&mut self) -> Option<ExtInf> {
        match mem::take(self) {
            Self::Empty => None,
            Self::Pending(metadata) => Some(metadata),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}
