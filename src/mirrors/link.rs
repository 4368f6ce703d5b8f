//! Metalink/HTTP (RFC 6249) link values.
//!
//! Mirror base URLs and the request target are joined by plain string
//! concatenation. No slash is added or removed: `http://m1/` + `/a.iso`
//! yields `http://m1//a.iso`.

use std::fmt;

use crate::config::ServerConfig;
use crate::mirrors::priority::PriorityOrder;

/// One advertised duplicate of the requested resource.
///
/// Formats as `<{mirror}{target}>; rel="duplicate"; pri={priority}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorLink<'a> {
    pub mirror: &'a str,
    pub target: &'a str,
    pub priority: usize,
}

impl fmt::Display for MirrorLink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}{}>; rel=\"duplicate\"; pri={}",
            self.mirror, self.target, self.priority
        )
    }
}

/// The configured mirrors together with their priority ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorSet {
    mirrors: Vec<String>,
    order: PriorityOrder,
}

impl MirrorSet {
    pub fn new(mirrors: Vec<String>, order: PriorityOrder) -> Self {
        Self { mirrors, order }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.mirrors.clone(), config.priority)
    }

    /// `Location` value for a request target: the first mirror plus the target.
    pub fn location(&self, target: &str) -> String {
        let primary = self.mirrors.first().map(String::as_str).unwrap_or_default();
        format!("{}{}", primary, target)
    }

    /// One link per mirror, in configured order.
    pub fn links<'a>(&'a self, target: &'a str) -> impl Iterator<Item = MirrorLink<'a>> + 'a {
        self.mirrors
            .iter()
            .zip(self.order.priorities(self.mirrors.len()))
            .map(move |(mirror, priority)| MirrorLink {
                mirror: mirror.as_str(),
                target,
                priority,
            })
    }

    pub fn len(&self) -> usize {
        self.mirrors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mirrors.is_empty()
    }
}
