//! Mode resolution. Decided here, never by the reasoning engine.

use adapt_core::{Mode, RequestType};

/// Explicit requests apply immediately; everything else is a suggestion.
pub fn resolve_mode(request_type: RequestType) -> Mode {
    match request_type {
        RequestType::Explicit => Mode::Apply,
        RequestType::Implicit => Mode::Suggest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_mode() {
        assert_eq!(resolve_mode(RequestType::Explicit), Mode::Apply);
        assert_eq!(resolve_mode(RequestType::Implicit), Mode::Suggest);
    }
}
