//! Cosmetic "concealed link" labels.
//!
//! A concealed link is a markdown-style `[label](target)` pair whose label
//! looks like a Roblox URL while the target is the real short URL. The colon
//! in labels is broken up as `_:_` so chat clients do not auto-link it.

use crate::domain::entities::LinkType;
use crate::utils::code_generator::{generate_code, random_id};

const SERVER_CODE_LENGTH: usize = 32;
const MAX_USER_ID: u64 = 9_999_999;
const MAX_GROUP_ID: u64 = 99_999_999;

/// Builds the concealed link for `short_url`.
///
/// Without a link type the label is `input_url`, the text as the caller typed
/// it, with its colons broken up.
pub fn concealed_link(link_type: Option<LinkType>, input_url: &str, short_url: &str) -> String {
    let label = match link_type {
        Some(LinkType::Server) => format!(
            "https_:_//www.roblox.com/share?code={}&type=Server",
            generate_code(SERVER_CODE_LENGTH)
        ),
        Some(LinkType::Profile) => format!(
            "https_:_//www.roblox.com/users/{}/profile",
            random_id(MAX_USER_ID)
        ),
        Some(LinkType::Group) => format!(
            "www.roblox.com/communities/{}/about",
            random_id(MAX_GROUP_ID)
        ),
        None => input_url.replace(':', "_:_"),
    };

    format!("[{label}]({short_url})")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: &str = "https://is.gd/abc123";

    #[test]
    fn test_server_label() {
        let link = concealed_link(Some(LinkType::Server), "https://x.com", SHORT);
        assert!(link.starts_with("[https_:_//www.roblox.com/share?code="));
        assert!(link.ends_with("&type=Server](https://is.gd/abc123)"));
    }

    #[test]
    fn test_profile_label() {
        let link = concealed_link(Some(LinkType::Profile), "https://x.com", SHORT);
        assert!(link.starts_with("[https_:_//www.roblox.com/users/"));
        assert!(link.ends_with("/profile](https://is.gd/abc123)"));
    }

    #[test]
    fn test_group_label() {
        let link = concealed_link(Some(LinkType::Group), "https://x.com", SHORT);
        assert!(link.starts_with("[www.roblox.com/communities/"));
        assert!(link.ends_with("/about](https://is.gd/abc123)"));
    }

    #[test]
    fn test_untyped_label_breaks_colons() {
        let link = concealed_link(None, "https://x.com:8080/a", SHORT);
        assert_eq!(link, "[https_:_//x.com_:_8080/a](https://is.gd/abc123)");
    }
}
