//! Rewriting of response bodies before they are emitted

pub mod prefix_rewrite;

pub use prefix_rewrite::PrefixRewrite;
