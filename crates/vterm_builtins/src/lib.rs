//! Collection of built-in commands for vterm
//!
//! Each verb lives in its own module as a unit struct implementing
//! [`vterm_core::Builtin`]; [`all`] hands the full set to the dispatcher.

use std::sync::Arc;
use vterm_core::Builtin;

pub mod calc;
pub mod cd;
pub mod celebrate;
pub mod common;
pub mod copy;
pub mod edit;
pub mod grep;
pub mod help;
pub mod ls;
pub mod man;
pub mod mkdir;
pub mod rm;
pub mod touch;
pub mod version;
pub mod view;

pub use calc::CalcCommand;
pub use cd::CdCommand;
pub use celebrate::CelebrateCommand;
pub use copy::CopyCommand;
pub use edit::EditCommand;
pub use grep::GrepCommand;
pub use help::HelpCommand;
pub use ls::LsCommand;
pub use man::ManCommand;
pub use mkdir::MkdirCommand;
pub use rm::RmCommand;
pub use touch::TouchCommand;
pub use version::VersionCommand;
pub use view::ViewCommand;

/// Every built-in action, ready to register with the dispatcher.
pub fn all() -> Vec<Arc<dyn Builtin>> {
    vec![
        Arc::new(CopyCommand),
        Arc::new(CalcCommand),
        Arc::new(LsCommand),
        Arc::new(CdCommand),
        Arc::new(MkdirCommand),
        Arc::new(ManCommand),
        Arc::new(EditCommand),
        Arc::new(ViewCommand),
        Arc::new(TouchCommand),
        Arc::new(RmCommand),
        Arc::new(GrepCommand),
        Arc::new(HelpCommand),
        Arc::new(VersionCommand),
        Arc::new(CelebrateCommand),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use vterm_core::CommandTable;

    #[test]
    fn every_action_verb_has_a_builtin() {
        let registered: Vec<&str> = all().iter().map(|b| b.name()).collect();
        let table = CommandTable::new();
        for spec in table.iter() {
            if !spec.reserved {
                assert!(
                    registered.contains(&spec.name),
                    "no builtin registered for {}",
                    spec.name
                );
            }
        }
        // Reserved zero-argument verbs with real actions are registered too.
        assert!(registered.contains(&"version"));
        assert!(registered.contains(&"celebrate"));
    }
}
