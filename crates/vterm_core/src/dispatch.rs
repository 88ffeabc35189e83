//! Tokenizer and dispatcher
//!
//! One raw line comes in per loop iteration; exactly one path runs:
//! a reserved keyword, a pipeline of external commands, a built-in verb,
//! or the unknown-command report with ranked spelling suggestions.
//! Classification order is strict precedence — once a branch matches, the
//! later ones are unreachable for that line.

use crate::builtin::{Builtin, Context};
use crate::console::{Console, Notice};
use crate::suggest;
use crate::table::{ArgSpec, CommandSpec, CommandTable};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Whether the read-eval loop keeps going after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Reserved keywords, matched case-insensitively against the whole line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reserved {
    Exit,
    Version,
    Clear,
    Celebrate,
    /// `quit` is not a verb; it only earns a hint pointing at `exit`.
    QuitHint,
}

/// Result of classifying one trimmed line.
#[derive(Debug)]
pub enum Classified<'a> {
    Reserved(Reserved),
    Pipeline(Vec<String>),
    Builtin {
        spec: &'a CommandSpec,
        argline: &'a str,
    },
    Usage(&'a CommandSpec),
    Unknown,
}

/// Split a raw line on the pipe delimiter, trimming each segment.
///
/// Idempotent: re-splitting an already-split segment yields itself.
pub fn split_pipeline(line: &str) -> Vec<String> {
    line.split('|').map(|s| s.trim().to_string()).collect()
}

/// Classify one trimmed line. First match wins.
pub fn classify<'a>(line: &'a str, table: &'a CommandTable) -> Classified<'a> {
    for (word, reserved) in [
        ("exit", Reserved::Exit),
        ("version", Reserved::Version),
        ("clear", Reserved::Clear),
        ("celebrate", Reserved::Celebrate),
    ] {
        if line.eq_ignore_ascii_case(word) {
            return Classified::Reserved(reserved);
        }
    }

    if line.contains('|') {
        return Classified::Pipeline(split_pipeline(line));
    }

    let (token, rest) = match line.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest.trim()),
        None => (line, ""),
    };

    if let Some(spec) = table.resolve_action(token) {
        if spec.arg == ArgSpec::Required && rest.is_empty() {
            return Classified::Usage(spec);
        }
        return Classified::Builtin { spec, argline: rest };
    }

    if token.eq_ignore_ascii_case("quit") {
        return Classified::Reserved(Reserved::QuitHint);
    }

    Classified::Unknown
}

/// The dispatcher: owns the command table and the builtin registry, both
/// immutable for the process lifetime.
pub struct Dispatcher {
    table: CommandTable,
    builtins: HashMap<&'static str, Arc<dyn Builtin>>,
}

impl Dispatcher {
    pub fn new(table: CommandTable) -> Self {
        Self {
            table,
            builtins: HashMap::new(),
        }
    }

    /// Register the given builtins, keyed by canonical verb name.
    pub fn with_builtins<I>(mut self, builtins: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Builtin>>,
    {
        for builtin in builtins {
            self.builtins.insert(builtin.name(), builtin);
        }
        self
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Classify and execute one raw input line. Every failure is reported
    /// through the console and the loop continues; only `exit` ends it.
    pub fn dispatch(&self, raw: &str, console: &mut dyn Console) -> LoopControl {
        let line = raw.trim();
        let classified = classify(line, &self.table);
        debug!(line, ?classified, "dispatching");

        match classified {
            Classified::Reserved(Reserved::Exit) => {
                console.print("Shutting Down...");
                return LoopControl::Exit;
            }
            Classified::Reserved(Reserved::Version) => self.invoke("version", "", console),
            Classified::Reserved(Reserved::Clear) => {
                console.clear_screen();
                console.banner();
            }
            Classified::Reserved(Reserved::Celebrate) => self.invoke("celebrate", "", console),
            Classified::Reserved(Reserved::QuitHint) => {
                console.print("Type 'exit' to shutdown vterm");
            }
            Classified::Pipeline(stages) => {
                let output = vterm_hal::pipeline::run_pipeline(&stages);
                console.print(&output);
            }
            Classified::Builtin { spec, argline } => self.invoke(spec.name, argline, console),
            Classified::Usage(spec) => {
                console.notify(
                    Notice::Error,
                    &format!("Argument needed. Usage: {}", spec.usage),
                );
            }
            Classified::Unknown => self.report_unknown(line, console),
        }

        LoopControl::Continue
    }

    fn invoke(&self, name: &str, argline: &str, console: &mut dyn Console) {
        let Some(builtin) = self.builtins.get(name) else {
            warn!(name, "verb has no registered builtin");
            console.notify(Notice::Error, &format!("Command not found: {name}"));
            return;
        };
        let mut ctx = Context {
            argline,
            console,
            table: &self.table,
        };
        if let Err(err) = builtin.invoke(&mut ctx) {
            console.notify(Notice::Error, &err.to_string());
        }
    }

    fn report_unknown(&self, line: &str, console: &mut dyn Console) {
        let candidates = self.table.names();
        let suggestions = suggest::suggest(line, &candidates);
        let message = if suggestions.is_empty() {
            format!("Command not found: {line}")
        } else {
            format!(
                "Command not found: {line}. Did you mean one of these? {}",
                suggestions.join(", ")
            )
        };
        console.notify(Notice::Error, &message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::ExecutionResult;
    use crate::console::{ReadOutcome, ScriptedConsole};
    use crate::error::{ShellError, ShellResult};
    use std::sync::Mutex;

    /// Records every invocation so classification paths can be asserted.
    struct Recording {
        verb: &'static str,
        calls: Mutex<Vec<String>>,
    }

    impl Recording {
        fn new(verb: &'static str) -> Arc<Self> {
            Arc::new(Self {
                verb,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Builtin for Recording {
        fn name(&self) -> &'static str {
            self.verb
        }

        fn synopsis(&self) -> &'static str {
            "recording stub"
        }

        fn usage(&self) -> &'static str {
            "stub"
        }

        fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
            self.calls.lock().unwrap().push(ctx.argline.to_string());
            Ok(ExecutionResult::success())
        }
    }

    struct Failing;

    impl Builtin for Failing {
        fn name(&self) -> &'static str {
            "view"
        }

        fn synopsis(&self) -> &'static str {
            "always fails"
        }

        fn usage(&self) -> &'static str {
            "view <FILENAME>"
        }

        fn invoke(&self, _ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
            Err(ShellError::not_found("File 'ghost.txt' not found."))
        }
    }

    fn table() -> CommandTable {
        CommandTable::new()
    }

    #[test]
    fn split_pipeline_trims_segments() {
        assert_eq!(
            split_pipeline("ls -la |  grep foo| wc -l"),
            vec!["ls -la", "grep foo", "wc -l"]
        );
    }

    #[test]
    fn split_pipeline_is_idempotent() {
        let first = split_pipeline("a b | c d");
        for segment in &first {
            assert_eq!(split_pipeline(segment), vec![segment.clone()]);
        }
    }

    #[test]
    fn reserved_keywords_match_case_insensitively() {
        let t = table();
        assert!(matches!(
            classify("EXIT", &t),
            Classified::Reserved(Reserved::Exit)
        ));
        assert!(matches!(
            classify("Version", &t),
            Classified::Reserved(Reserved::Version)
        ));
        assert!(matches!(
            classify("celebrate", &t),
            Classified::Reserved(Reserved::Celebrate)
        ));
    }

    #[test]
    fn pipe_anywhere_beats_builtin_verbs() {
        let t = table();
        match classify("view notes.txt | wc -l", &t) {
            Classified::Pipeline(stages) => {
                assert_eq!(stages, vec!["view notes.txt", "wc -l"]);
            }
            other => panic!("expected pipeline, got {other:?}"),
        }
    }

    #[test]
    fn missing_required_argument_is_usage_not_unknown() {
        let t = table();
        match classify("cd", &t) {
            Classified::Usage(spec) => assert_eq!(spec.name, "cd"),
            other => panic!("expected usage error, got {other:?}"),
        }
    }

    #[test]
    fn first_token_resolves_aliases() {
        let t = table();
        match classify("cat notes.txt", &t) {
            Classified::Builtin { spec, argline } => {
                assert_eq!(spec.name, "view");
                assert_eq!(argline, "notes.txt");
            }
            other => panic!("expected builtin, got {other:?}"),
        }
    }

    #[test]
    fn reserved_verb_with_remainder_is_not_reserved() {
        // "exit now" is no longer the exact keyword; it falls through to the
        // suggestion path rather than terminating the shell.
        let t = table();
        assert!(matches!(classify("exit now", &t), Classified::Unknown));
    }

    #[test]
    fn empty_line_is_unknown() {
        let t = table();
        assert!(matches!(classify("", &t), Classified::Unknown));
    }

    #[test]
    fn quit_earns_a_hint() {
        let t = table();
        assert!(matches!(
            classify("quit", &t),
            Classified::Reserved(Reserved::QuitHint)
        ));
    }

    #[test]
    fn dispatch_passes_remainder_to_builtin() {
        let recording = Recording::new("edit");
        let dispatcher = Dispatcher::new(table())
            .with_builtins([recording.clone() as Arc<dyn Builtin>]);
        let mut console = ScriptedConsole::new();

        let flow = dispatcher.dispatch("  edit my notes.txt  ", &mut console);
        assert_eq!(flow, LoopControl::Continue);
        assert_eq!(recording.calls(), vec!["my notes.txt".to_string()]);
    }

    #[test]
    fn dispatch_reports_builtin_errors_and_continues() {
        let dispatcher =
            Dispatcher::new(table()).with_builtins([Arc::new(Failing) as Arc<dyn Builtin>]);
        let mut console = ScriptedConsole::new();

        let flow = dispatcher.dispatch("view ghost.txt", &mut console);
        assert_eq!(flow, LoopControl::Continue);
        assert_eq!(console.notices.len(), 1);
        assert_eq!(console.notices[0].0, Notice::Error);
        assert!(console.notices[0].1.contains("ghost.txt"));
    }

    #[test]
    fn dispatch_exit_ends_the_loop() {
        let dispatcher = Dispatcher::new(table());
        let mut console = ScriptedConsole::new();
        assert_eq!(dispatcher.dispatch("exit", &mut console), LoopControl::Exit);
        assert!(console.transcript().contains("Shutting Down..."));
    }

    #[test]
    fn dispatch_clear_rerenders_banner() {
        let dispatcher = Dispatcher::new(table());
        let mut console = ScriptedConsole::new();
        dispatcher.dispatch("clear", &mut console);
        assert_eq!(console.clears, 1);
        assert_eq!(console.banners, 1);
    }

    #[test]
    fn dispatch_usage_error_names_the_usage_line() {
        let dispatcher = Dispatcher::new(table());
        let mut console = ScriptedConsole::new();
        dispatcher.dispatch("mkdir", &mut console);
        assert_eq!(
            console.notices[0].1,
            "Argument needed. Usage: mkdir <DIRECTORY>"
        );
    }

    #[test]
    fn unknown_line_gets_ranked_suggestions() {
        let dispatcher = Dispatcher::new(table());
        let mut console = ScriptedConsole::new();
        dispatcher.dispatch("lls", &mut console);
        let message = &console.notices[0].1;
        assert!(message.starts_with("Command not found: lls"));
        assert!(message.contains("Did you mean one of these?"));
        assert!(message.contains("ls"));
    }

    #[test]
    fn unknown_line_without_matches_gets_bare_report() {
        let dispatcher = Dispatcher::new(table());
        let mut console = ScriptedConsole::new();
        dispatcher.dispatch("qqqqqqqq", &mut console);
        assert_eq!(console.notices[0].1, "Command not found: qqqqqqqq");
    }

    #[cfg(unix)]
    #[test]
    fn dispatch_runs_pipelines_and_prints_the_result() {
        let dispatcher = Dispatcher::new(table());
        let mut console = ScriptedConsole::new();
        dispatcher.dispatch("echo hello | wc -l", &mut console);
        assert_eq!(console.printed.len(), 1);
        assert_eq!(console.printed[0].trim(), "1");
    }

    #[test]
    fn scripted_console_read_is_available_to_builtins() {
        // Builtins with nested input modes read through the same console.
        let mut console = ScriptedConsole::with_inputs(["text"]);
        assert_eq!(
            console.read_line("... "),
            ReadOutcome::Line("text".to_string())
        );
    }
}
