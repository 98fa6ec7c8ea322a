use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

const MAX_ADDRESS_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;

static LOCAL_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
        .expect("local part pattern should compile")
});

// At least two labels; the last one starts with a letter or is punycode.
static DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^(?:[a-z0-9]+(?:-+[a-z0-9]+)*\.)+(?:[a-z][a-z0-9]*(?:-+[a-z0-9]+)*|xn--[a-z0-9]+)$")
        .case_insensitive(true)
        .build()
        .expect("domain pattern should compile")
});

pub fn is_valid_email(value: &str) -> bool {
    if value.len() > MAX_ADDRESS_LEN {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > MAX_LOCAL_LEN {
        return false;
    }
    if domain.split('.').any(|label| label.len() > MAX_LABEL_LEN) {
        return false;
    }
    LOCAL_PART.is_match(local) && DOMAIN.is_match(domain)
}
