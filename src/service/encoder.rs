//! Projection of pipeline tokens into response tokens.

use crate::analysis::attribute::{self, AttributeSelection};
use crate::analysis::token::Token;
use crate::protocol::response::AnalyzedToken;

/// Project one pipeline token into its response form.
pub fn encode_token(
    token: &Token,
    selection: &AttributeSelection,
    short_names: bool,
) -> AnalyzedToken {
    AnalyzedToken {
        term: token.text.clone(),
        position: token.position,
        start_offset: token.start_offset,
        end_offset: token.end_offset,
        attributes: attribute::collect_attributes(token, selection, short_names),
    }
}
