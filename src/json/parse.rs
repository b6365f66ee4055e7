//! Purpose: Provide the simd-json decode entrypoint and its capability probe.
//! Exports: `runtime_supported`, `parse_document`, parse-failure taxonomy helpers.
//! Role: Parser boundary that centralizes simd-json usage details.
//! Invariants: Callers copy the pristine buffer once to satisfy the mutable-slice API.
//! Invariants: Category labels and hint wording stay stable for diagnostics.
//! Notes: Error mapping to domain kinds is done by callsites so context stays explicit.

use bstr::ByteSlice;
use simd_json::OwnedValue;

/// Whether this CPU can run the SIMD stages the parser's fast path is built on.
/// Checked once at loader construction, not kept as global state.
#[cfg(target_arch = "x86_64")]
pub(crate) fn runtime_supported() -> bool {
    std::arch::is_x86_feature_detected!("sse4.2") && std::arch::is_x86_feature_detected!("pclmulqdq")
}

// NEON is architectural on aarch64.
#[cfg(target_arch = "aarch64")]
pub(crate) fn runtime_supported() -> bool {
    true
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub(crate) fn runtime_supported() -> bool {
    false
}

/// Parse one top-level JSON document. The input slice is mutated in place.
pub(crate) fn parse_document(bytes: &mut [u8]) -> Result<OwnedValue, simd_json::Error> {
    simd_json::to_owned_value(bytes)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ParseFailureCategory {
    Syntax,
    NumericRange,
    Utf8,
    DepthLimit,
    Unknown,
}

impl ParseFailureCategory {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::NumericRange => "numeric-range",
            ParseFailureCategory::Utf8 => "utf-8",
            ParseFailureCategory::DepthLimit => "depth-limit",
            ParseFailureCategory::Unknown => "unknown",
        }
    }
}

pub(crate) fn categorize_error(err: &simd_json::Error) -> ParseFailureCategory {
    categorize_message(&err.to_string())
}

pub(crate) fn categorize_message(message: &str) -> ParseFailureCategory {
    let message = message.to_ascii_lowercase();
    let has = |needle: &str| message.contains(needle);
    if has("utf-8") || has("utf8") {
        ParseFailureCategory::Utf8
    } else if has("overflow") || has("out of range") || has("invalid number") || has("exponent") {
        ParseFailureCategory::NumericRange
    } else if has("recursion") || has("depth") || has("nesting") {
        ParseFailureCategory::DepthLimit
    } else if has("expected")
        || has("unexpected")
        || has("unterminated")
        || has("syntax")
        || has("eof")
        || has("early end")
        || has("trailing")
        || has("escape")
    {
        ParseFailureCategory::Syntax
    } else {
        ParseFailureCategory::Unknown
    }
}

pub(crate) fn hint_for_error(err: &simd_json::Error, context: &str) -> String {
    format!(
        "parse category: {}; context: {}",
        categorize_error(err).label(),
        context
    )
}

/// Bounded, lossily decoded view of raw input for diagnostics.
pub(crate) fn snippet(input: &[u8], max: usize) -> String {
    truncate_snippet(&input.to_str_lossy(), max)
}

fn truncate_snippet(input: &str, max: usize) -> String {
    if input.len() <= max {
        return input.to_string();
    }
    let suffix = "...";
    if max <= suffix.len() {
        return suffix[..max].to_string();
    }
    let mut cut = max - suffix.len();
    while cut > 0 && !input.is_char_boundary(cut) {
        cut -= 1;
    }
    let mut snippet = String::with_capacity(cut + suffix.len());
    snippet.push_str(&input[..cut]);
    snippet.push_str(suffix);
    snippet
}
