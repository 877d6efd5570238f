//! Display category of a shortened link.

use serde::{Deserialize, Serialize};

/// How the client intends to present the short link.
///
/// Only affects the cosmetic concealed-link label; shortening itself is
/// identical for every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Profile,
    Server,
    Group,
}
