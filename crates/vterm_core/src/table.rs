//! The command table
//!
//! An ordered, immutable mapping from verb to help metadata. The table is
//! built once at startup and passed by reference into the dispatcher; it is
//! both the help universe (`help` / `man`) and the candidate universe for
//! spelling suggestions. Iteration order is insertion order, which also
//! breaks suggestion-score ties.

/// Argument contract of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgSpec {
    /// No remainder expected.
    None,
    /// Remainder optional (bare `help` lists everything).
    Optional,
    /// Missing remainder is a usage error.
    Required,
}

/// One table entry: canonical verb, aliases, help and usage text.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub help: &'static str,
    pub usage: &'static str,
    pub arg: ArgSpec,
    /// Reserved keywords (`exit`, `version`, `clear`, `celebrate`) are
    /// matched case-insensitively against the whole line, never through the
    /// first-token path.
    pub reserved: bool,
}

/// Ordered command table, immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct CommandTable {
    specs: Vec<CommandSpec>,
}

impl CommandTable {
    /// Build the fixed vterm verb table.
    pub fn new() -> Self {
        let specs = vec![
            CommandSpec {
                name: "copy",
                aliases: &[],
                help: "Copy a directory from source to destination. Usage: copy <SOURCE> <DESTINATION>",
                usage: "copy <SOURCE> <DESTINATION>",
                arg: ArgSpec::Required,
                reserved: false,
            },
            CommandSpec {
                name: "python",
                aliases: &[],
                help: "Evaluate arithmetic expressions interactively. Usage: python",
                usage: "python",
                arg: ArgSpec::None,
                reserved: false,
            },
            CommandSpec {
                name: "ls",
                aliases: &[],
                help: "List files and directories in the current directory. Usage: ls",
                usage: "ls",
                arg: ArgSpec::None,
                reserved: false,
            },
            CommandSpec {
                name: "cd",
                aliases: &[],
                help: "Change the current directory. Usage: cd <DIRECTORY>",
                usage: "cd <DIRECTORY>",
                arg: ArgSpec::Required,
                reserved: false,
            },
            CommandSpec {
                name: "mkdir",
                aliases: &[],
                help: "Create a new directory. Usage: mkdir <DIRECTORY>",
                usage: "mkdir <DIRECTORY>",
                arg: ArgSpec::Required,
                reserved: false,
            },
            CommandSpec {
                name: "clear",
                aliases: &[],
                help: "Clear the terminal screen. Usage: clear",
                usage: "clear",
                arg: ArgSpec::None,
                reserved: true,
            },
            CommandSpec {
                name: "man",
                aliases: &[],
                help: "View descriptions of available commands. Usage: man <COMMAND>",
                usage: "man <COMMAND>",
                arg: ArgSpec::Required,
                reserved: false,
            },
            CommandSpec {
                name: "exit",
                aliases: &[],
                help: "Exit the terminal. Usage: exit",
                usage: "exit",
                arg: ArgSpec::None,
                reserved: true,
            },
            CommandSpec {
                name: "edit",
                aliases: &["nano", "vim"],
                help: "Edit or create a text file. Usage: edit <FILENAME> OR nano <FILENAME> OR vim <FILENAME>",
                usage: "edit OR nano OR vim <FILENAME>",
                arg: ArgSpec::Required,
                reserved: false,
            },
            CommandSpec {
                name: "view",
                aliases: &["cat"],
                help: "View the content of a text file. Usage: view <FILENAME> OR cat <FILENAME>",
                usage: "view OR cat <FILENAME>",
                arg: ArgSpec::Required,
                reserved: false,
            },
            CommandSpec {
                name: "touch",
                aliases: &["create"],
                help: "Create an empty file. Usage: create <FILENAME> OR touch <FILENAME>",
                usage: "create OR touch <FILENAME>",
                arg: ArgSpec::Required,
                reserved: false,
            },
            CommandSpec {
                name: "rm",
                aliases: &[],
                help: "Remove a file or directory. Usage: rm <FILENAME> or rm -r <DIRECTORY>",
                usage: "rm <FILENAME> or rm -r <DIRECTORY>",
                arg: ArgSpec::Required,
                reserved: false,
            },
            CommandSpec {
                name: "grep",
                aliases: &[],
                help: "Filter lines of the provided text by a regular expression. Usage: grep <PATTERN>",
                usage: "grep <PATTERN>",
                arg: ArgSpec::Required,
                reserved: false,
            },
            CommandSpec {
                name: "help",
                aliases: &["commands"],
                help: "Provides help for available commands. Usage: help <COMMAND>",
                usage: "help <COMMAND>",
                arg: ArgSpec::Optional,
                reserved: false,
            },
            CommandSpec {
                name: "version",
                aliases: &[],
                help: "Prints the terminal version",
                usage: "version",
                arg: ArgSpec::None,
                reserved: true,
            },
            CommandSpec {
                name: "celebrate",
                aliases: &[],
                help: "Celebrates. What more do I need to tell you?",
                usage: "celebrate",
                arg: ArgSpec::None,
                reserved: true,
            },
        ];
        Self { specs }
    }

    /// Resolve a first token to its entry, following aliases.
    pub fn resolve(&self, token: &str) -> Option<&CommandSpec> {
        self.specs
            .iter()
            .find(|s| s.name == token || s.aliases.contains(&token))
    }

    /// Resolve a first token to a dispatchable (non-reserved) entry.
    pub fn resolve_action(&self, token: &str) -> Option<&CommandSpec> {
        self.resolve(token).filter(|s| !s.reserved)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.specs.iter()
    }

    /// Canonical verb names in insertion order: the suggestion candidates.
    pub fn names(&self) -> Vec<&'static str> {
        self.specs.iter().map(|s| s.name).collect()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_has_help_text() {
        let table = CommandTable::new();
        for spec in table.iter() {
            assert!(!spec.help.is_empty(), "{} has no help text", spec.name);
            assert!(!spec.usage.is_empty(), "{} has no usage text", spec.name);
        }
    }

    #[test]
    fn aliases_resolve_to_canonical_entries() {
        let table = CommandTable::new();
        assert_eq!(table.resolve("nano").unwrap().name, "edit");
        assert_eq!(table.resolve("vim").unwrap().name, "edit");
        assert_eq!(table.resolve("cat").unwrap().name, "view");
        assert_eq!(table.resolve("create").unwrap().name, "touch");
        assert_eq!(table.resolve("commands").unwrap().name, "help");
    }

    #[test]
    fn reserved_verbs_are_not_actions() {
        let table = CommandTable::new();
        for verb in ["exit", "version", "clear", "celebrate"] {
            assert!(table.resolve(verb).unwrap().reserved);
            assert!(table.resolve_action(verb).is_none());
        }
        assert!(table.resolve_action("cd").is_some());
    }

    #[test]
    fn names_keep_insertion_order() {
        let table = CommandTable::new();
        let names = table.names();
        assert_eq!(names.first(), Some(&"copy"));
        assert!(names.contains(&"grep"));
        assert_eq!(names.last(), Some(&"celebrate"));
    }

    #[test]
    fn unknown_token_does_not_resolve() {
        assert!(CommandTable::new().resolve("frobnicate").is_none());
    }
}
