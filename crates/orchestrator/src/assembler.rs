//! Final response assembly.

use adapt_core::{AdaptResponse, ContentActions, Mode, UiActions};

/// Combine the resolved mode, shaped UI actions and content results.
///
/// The mode always comes from the resolver, never from the engine's plan.
pub fn assemble_response(
    mode: Mode,
    ui_actions: UiActions,
    content_actions: ContentActions,
) -> AdaptResponse {
    AdaptResponse {
        mode,
        ui_actions,
        content_actions,
    }
}
