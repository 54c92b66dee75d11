//! URL Builders
//!
//! Login redirect and external share links.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// `/login?next=<path>`
pub fn login_redirect(login_path: &str, current_path: &str) -> String {
    format!("{}?next={}", login_path, encode_component(current_path))
}

pub fn linkedin_share(url: &str) -> String {
    format!(
        "https://www.linkedin.com/sharing/share-offsite/?url={}",
        encode_component(url)
    )
}

pub fn twitter_share(url: &str, title: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?url={}&text={}",
        encode_component(url),
        encode_component(title)
    )
}
