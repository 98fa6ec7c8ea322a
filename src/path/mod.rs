mod normalize;

pub use normalize::{eq_folded, join_prefix, normalize_prefix, normalize_uri, starts_with_folded};
