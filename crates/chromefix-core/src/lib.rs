pub mod patcher;
pub mod rules;

pub use patcher::{apply_rules, patch_file};
pub use rules::{Rule, RULES, SESSION_ID_EXPR};
