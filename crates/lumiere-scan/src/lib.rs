//! lumiere-scan - attribute-driven page behaviors
//!
//! Document-order scans over `lm-*` attributes: social rendering (messages,
//! comments, teams, notes, reactions, topics), reply threading, role grants,
//! click wiring, markup auditing, and meeting links. Every scanner takes the
//! document and console explicitly and walks the light tree only; shadow
//! content stays out of reach.

pub mod attr;

mod audit;
mod interact;
mod meeting;
mod reaction;
mod reply;
mod roles;
mod social;

pub use audit::scan_html_for_illegal_usage;
pub use interact::{add_cta_listeners, display_output, report_errors, set_placeholder};
pub use meeting::{copy_link, create_meeting_link};
pub use reaction::{resolve_reaction, Reaction};
pub use reply::reply_to_message;
pub use roles::{assign_roles, Role, RoleGrant};
pub use social::{
    add_comment, announcement_content, create_note, create_topics_for_posts, identify_figures,
    indicate_sender, indicate_team, indicate_team_member, post_status_with_reaction, send_message,
    Figure,
};

use lumiere_dom::Console;
use thiserror::Error;

/// Scanner usage errors
#[derive(Debug, Error)]
pub enum ScanError {
    /// A placeholder was requested on something other than `<lm-input>`
    #[error("placeholder hints only apply to <lm-input> elements, got <{0}>")]
    NotAnInput(String),
}

/// Startup greeting, logged once the page wiring is in place
pub fn welcome(console: &Console) {
    console.log("Welcome to Lumiere!");
}
