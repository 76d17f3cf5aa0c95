//! The built-in `help` runnable.
//!
//! The dispatcher hands `help` the whole argument vector, so `args[0]` is
//! `"help"` itself (or absent for a bare invocation) and `args[1]` names the
//! help sub-command.

use runkit_dispatch::{
    validate, Arity, CommandContext, LineStyle, Runnable, SubcommandTable, HELP_ID,
};
use runkit_input::TextPrompt;
use tracing::debug;

use crate::config::Config;
use crate::scaffold::{Generator, RunnableSpec};

/// Name shown in usage lines.
pub const PROGRAM: &str = "runkit";

pub const LIST_RUNNABLES: &str = "list-runnables";
pub const LIST_RUNNABLE_COMMANDS: &str = "list-runnable-commands";
pub const CREATE_RUNNABLE: &str = "create-runnable";

const SUBCOMMANDS: &[(&str, &str)] = &[
    (LIST_RUNNABLES, "List every registered runnable"),
    (
        LIST_RUNNABLE_COMMANDS,
        "<id>  Show a runnable's sub-commands and their arities",
    ),
    (CREATE_RUNNABLE, "Generate a new runnable source file"),
];

/// Usage, registry listings and runnable scaffolding.
#[derive(Debug, Default, Clone, Copy)]
pub struct Help;

impl Help {
    fn config<'a>(ctx: &'a CommandContext<'_>) -> anyhow::Result<&'a Config> {
        ctx.app_state.get_required::<Config>()
    }

    fn usage(&self, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
        let info = Self::config(ctx)?.info_style()?;
        let out = ctx.output;
        out.write_line(&format!("{} command line interface help.", PROGRAM), info)?;
        out.write_line(
            &format!(
                "Usage:  {} <command id> [sub-command] [...arguments]",
                PROGRAM
            ),
            LineStyle::plain(),
        )?;
        out.write_line(
            &format!("        E.g: {} {} {}", PROGRAM, HELP_ID, LIST_RUNNABLES),
            LineStyle::plain(),
        )?;
        out.write_line("", LineStyle::plain())?;
        out.write_line("Help sub-commands:", info)?;
        for (name, about) in SUBCOMMANDS {
            out.write_line(&format!("  {:<24} {}", name, about), LineStyle::plain())?;
        }
        Ok(())
    }

    fn list_runnables(&self, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
        let info = Self::config(ctx)?.info_style()?;
        ctx.output.write_line("Registered runnables:", info)?;
        for runnable in ctx.registry.all() {
            ctx.output.write_line(
                &format!("  {:<24} {}", runnable.id(), runnable.type_name()),
                LineStyle::plain(),
            )?;
        }
        Ok(())
    }

    fn list_runnable_commands(&self, id: &str, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
        let runnable = ctx.registry.get(id)?;
        let table = runnable.commands();
        let info = Self::config(ctx)?.info_style()?;

        if table.is_empty() {
            ctx.output
                .write_line(&format!("[{}] declares no sub-commands", id), info)?;
            return Ok(());
        }

        ctx.output
            .write_line(&format!("Sub-commands of [{}]:", id), info)?;
        for (name, arity) in table.iter() {
            ctx.output
                .write_line(&format!("  {:<24} {}", name, arity), LineStyle::plain())?;
        }
        Ok(())
    }

    fn create_runnable(&self, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
        let config = Self::config(ctx)?;
        let generator = Generator::from_config(config)?;
        let terminal = ctx.terminal;

        let name = TextPrompt::new("Runnable name: ").ask(terminal)?;
        let location = TextPrompt::new(format!(
            "Output directory [{}]: ",
            generator.default_dir().display()
        ))
        .optional()
        .ask(terminal)?;
        let module_path = TextPrompt::new("Module path (optional): ")
            .optional()
            .ask(terminal)?;
        let id = TextPrompt::new("Command id: ").ask(terminal)?;
        let commands = TextPrompt::new("Sub-commands (name:arity, comma separated): ")
            .optional()
            .ask(terminal)?;

        let spec = RunnableSpec {
            name: name.unwrap_or_default(),
            location: location.map(Into::into),
            module_path,
            id: id.unwrap_or_default(),
            commands: commands.unwrap_or_default(),
        };
        debug!(?spec, "creating runnable");

        let path = generator.generate(&spec)?;
        ctx.output.write_line(
            &format!("Runnable [{}] created at {}", spec.name, path.display()),
            config.info_style()?,
        )?;
        Ok(())
    }
}

impl Runnable for Help {
    fn id(&self) -> &str {
        HELP_ID
    }

    fn commands(&self) -> SubcommandTable {
        SubcommandTable::new()
            .with(HELP_ID, Arity::NoArgs)
            .with(LIST_RUNNABLES, Arity::NoArgs)
            .with(CREATE_RUNNABLE, Arity::NoArgs)
            .with(LIST_RUNNABLE_COMMANDS, Arity::Exact(1))
    }

    fn run(&self, args: &[String], _total: usize, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
        let Some(sub) = args.get(1).map(String::as_str) else {
            return self.usage(ctx);
        };
        let rest = &args[2..];

        let table = self.commands();
        if !table.contains(sub) {
            debug!(sub, "unknown help topic, showing usage");
            return self.usage(ctx);
        }
        validate(&table, sub, rest)?;

        match sub {
            LIST_RUNNABLES => self.list_runnables(ctx),
            LIST_RUNNABLE_COMMANDS => self.list_runnable_commands(&rest[0], ctx),
            CREATE_RUNNABLE => self.create_runnable(ctx),
            _ => self.usage(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runkit_dispatch::{ArityError, Extensions, MemorySink, Registry};
    use runkit_input::MockTerminal;

    struct Route;

    impl Runnable for Route {
        fn id(&self) -> &str {
            "route"
        }

        fn commands(&self) -> SubcommandTable {
            SubcommandTable::new()
                .with("create-route", Arity::Exact(4))
                .with("list", Arity::NoArgs)
        }

        fn run(&self, _: &[String], _: usize, _: &CommandContext<'_>) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn run_help(argv: &[&str]) -> (anyhow::Result<()>, MemorySink) {
        let mut registry = Registry::new();
        registry.register(Help);
        registry.register(Route);
        let mut state = Extensions::new();
        state.insert(Config::default());

        let sink = MemorySink::new();
        let terminal = MockTerminal::eof();
        let ctx = CommandContext {
            registry: &registry,
            output: &sink,
            terminal: &terminal,
            app_state: &state,
        };
        let args: Vec<String> = argv.iter().map(|s| s.to_string()).collect();
        let result = Help.run(&args, args.len(), &ctx);
        (result, sink)
    }

    #[test]
    fn bare_help_prints_usage() {
        let (result, sink) = run_help(&[]);
        result.unwrap();
        let text = sink.stdout_text();
        assert!(text.contains("Usage:  runkit <command id>"));
        assert!(text.contains(LIST_RUNNABLE_COMMANDS));
    }

    #[test]
    fn unknown_topic_prints_usage() {
        let (result, sink) = run_help(&["help", "frobnicate"]);
        result.unwrap();
        assert!(sink.stdout_text().contains("Usage:"));
    }

    #[test]
    fn lists_runnables_in_registration_order() {
        let (result, sink) = run_help(&["help", LIST_RUNNABLES]);
        result.unwrap();
        let lines = sink.stdout();
        assert_eq!(lines[0], "Registered runnables:");
        assert!(lines[1].trim_start().starts_with("help"));
        assert!(lines[1].ends_with("runkit::help::Help"));
        assert!(lines[2].trim_start().starts_with("route"));
    }

    #[test]
    fn lists_a_runnables_table() {
        let (result, sink) = run_help(&["help", LIST_RUNNABLE_COMMANDS, "route"]);
        result.unwrap();
        let lines = sink.stdout();
        assert_eq!(lines[0], "Sub-commands of [route]:");
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), ["create-route", "4"]);
        assert_eq!(lines[2].split_whitespace().collect::<Vec<_>>(), ["list", "none"]);
    }

    #[test]
    fn unknown_target_is_not_found() {
        let (result, _) = run_help(&["help", LIST_RUNNABLE_COMMANDS, "ghost"]);
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<runkit_dispatch::DispatchError>(),
            Some(runkit_dispatch::DispatchError::NotFound(id)) if id == "ghost"
        ));
    }

    #[test]
    fn help_validates_its_own_arity() {
        let (result, sink) = run_help(&["help", LIST_RUNNABLE_COMMANDS]);
        assert!(matches!(
            result.unwrap_err().downcast_ref::<ArityError>(),
            Some(ArityError::WrongCount { expected: 1, actual: 0, .. })
        ));
        assert!(sink.lines().is_empty());

        let (result, _) = run_help(&["help", LIST_RUNNABLES, "extra"]);
        assert!(matches!(
            result.unwrap_err().downcast_ref::<ArityError>(),
            Some(ArityError::AcceptsNoArguments { .. })
        ));
    }

    #[test]
    fn create_runnable_without_answers_is_cancelled() {
        let (result, _) = run_help(&["help", CREATE_RUNNABLE]);
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<runkit_input::InputError>(),
            Some(runkit_input::InputError::PromptCancelled)
        ));
    }
}
