//! Attribute vocabulary
//!
//! Every `lm-*` attribute name the scanners read or write, in one place.

/// Placeholder hint for `<lm-input>`
pub const PLACEHOLDER_HINT: &str = "lm-plhd";
/// Message text
pub const MESSAGE: &str = "lm-message";
/// Comment text
pub const COMMENT: &str = "lm-comment";
/// Team name
pub const TEAM: &str = "lm-team";
/// Team-member name
pub const TEAM_MEMBER: &str = "lm-t-member";
/// Note text
pub const NOTE: &str = "lm-note";
/// Sender or commenter name
pub const SENDER: &str = "lm-s-from";
/// Post content
pub const POST: &str = "lm-post";
/// Reaction keyword for a post
pub const REACT: &str = "lm-react";
/// Topic label for a post
pub const TOPIC: &str = "lm-topic";
/// Role name
pub const ROLE: &str = "lm-role";
/// User a role is assigned to
pub const ROLE_FOR: &str = "lm-r-for";
/// Role written back onto the matched node
pub const ROLE_GRANTED: &str = "lm-r-granted";
/// Call-to-action text
pub const CTA: &str = "lm-cta";
/// Reply content
pub const REPLY: &str = "lm-reply";
/// Person a reply answers
pub const REPLY_TO: &str = "lm-rl-to";
/// Respondent
pub const REPLY_FROM: &str = "lm-rl-from";
/// Report content
pub const REPORT: &str = "lm-report";
/// Announcement text
pub const ANNOUNCEMENT: &str = "lm-anc";
/// Figure marker
pub const FIGURE: &str = "lm-figure";
/// Figure name
pub const FIGURE_NAME: &str = "lm-fgr-name";
