//! Storybench launcher - thin CLI around the playground core.
//!
//! ```bash
//! storybench                    # interactive playground
//! storybench --story Button/Default
//! storybench list               # print the catalog tree
//! storybench dump               # catalog metadata as JSON
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use storybench::actions::effective_props;
use storybench::catalog;
use storybench::config;
use storybench::controls::control_widgets;
use storybench::error::{ResultExt, StorybenchError};
use storybench::logging;
use storybench::registry::Registry;
use storybench::session::{Session, SessionHandle};
use storybench::story::ActionArg;

#[derive(Parser)]
#[command(name = "storybench", about = "Interactive component catalog playground")]
struct Cli {
    /// Open a specific story on launch, as COMPONENT/STORY
    #[arg(short, long)]
    story: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the catalog tree
    List,
    /// Dump catalog metadata as JSON
    Dump,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config();
    let _guard = logging::init(cfg.log_dir.clone());

    let registry = catalog::registry();

    match cli.command {
        Some(Command::List) => {
            print_catalog(&registry);
            return Ok(());
        }
        Some(Command::Dump) => {
            println!("{}", serde_json::to_string_pretty(&registry.describe())?);
            return Ok(());
        }
        None => {}
    }

    info!(event_type = "app_start", "Storybench starting");
    let session = SessionHandle::new(Session::new(registry, cfg.theme));

    if let Some(spec) = cli.story.as_deref() {
        preselect(&session, spec);
    }

    repl(&session)
}

fn print_catalog(registry: &Registry) {
    for system_name in registry.systems() {
        println!("{system_name}");
        let system = registry.system(system_name).expect("listed system exists");
        for (component, stories) in &system.components {
            println!("  {component}");
            for story in stories.keys() {
                println!("    {story}");
            }
        }
    }
}

/// Apply a `--story COMPONENT/STORY` preselect; unknown targets warn and
/// leave the session unselected.
fn preselect(session: &SessionHandle, spec: &str) {
    let parsed = match spec.split_once('/') {
        Some((component, story)) => Ok((component.to_string(), story.to_string())),
        None => Err(StorybenchError::InvalidStoryRef(spec.to_string())),
    };
    let Some((component, story)) = parsed.warn_on_err() else {
        return;
    };
    if !session.select_component_story(&component, &story) {
        Err::<(), _>(StorybenchError::UnknownStory { component, story }).warn_on_err();
    }
}

fn repl(session: &SessionHandle) -> Result<()> {
    println!("storybench playground. Type 'help' for commands.");
    print_canvas(session);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let rest: Vec<&str> = parts.collect();

        match command {
            "help" => print_help(),
            "systems" => {
                for name in session.available_systems() {
                    println!("  {name}");
                }
            }
            "use" => match rest.first() {
                Some(system) => {
                    if !session.select_system(system) {
                        println!("unknown design system: {system}");
                    }
                    print_canvas(session);
                }
                None => println!("usage: use SYSTEM"),
            },
            "list" => {
                session.with(|s| print_catalog(s.registry()));
            }
            "select" => match (rest.first(), rest.get(1)) {
                (Some(component), Some(story)) => {
                    if !session.select_component_story(component, story) {
                        println!("unknown story: {component}/{story}");
                    }
                    print_canvas(session);
                }
                _ => println!("usage: select COMPONENT STORY"),
            },
            "controls" => print_controls(session),
            "set" => match rest.split_first() {
                Some((prop, value_parts)) => {
                    set_prop(session, prop, &value_parts.join(" "));
                    print_canvas(session);
                }
                None => println!("usage: set PROP VALUE"),
            },
            "invoke" => match rest.split_first() {
                Some((prop, arg_parts)) => invoke_action(session, prop, &arg_parts.join(" ")),
                None => println!("usage: invoke PROP [JSON_ARG]"),
            },
            "log" => {
                let messages = session.log_messages();
                if messages.is_empty() {
                    println!("No actions logged yet.");
                }
                for message in messages {
                    println!("  {message}");
                }
            }
            "reset" => {
                session.reset_props();
                print_canvas(session);
            }
            "theme" => {
                let theme = session.toggle_theme();
                println!("theme: {}", theme.label());
                print_canvas(session);
            }
            "quit" | "exit" => break,
            other => println!("unknown command: {other} (try 'help')"),
        }
    }

    info!(event_type = "app_exit", "Storybench exiting");
    Ok(())
}

fn print_help() {
    println!("  systems                 list design systems");
    println!("  use SYSTEM              switch design system");
    println!("  list                    print the catalog tree");
    println!("  select COMPONENT STORY  open a story");
    println!("  controls                show editable controls");
    println!("  set PROP VALUE          edit a prop");
    println!("  invoke PROP [JSON]      invoke an action prop");
    println!("  log                     show the action log");
    println!("  reset                   restore story defaults");
    println!("  theme                   toggle light/dark");
    println!("  quit                    exit");
}

fn print_canvas(session: &SessionHandle) {
    let palette = session.theme().palette();
    match session.current_story() {
        Some(story) => {
            let selection = session.selection().expect("story implies selection");
            println!(
                "{}Canvas: {}/{}{}",
                palette.heading, selection.component, selection.story, palette.reset
            );
            let props = effective_props(session);
            for line in story.component.preview(&props).lines() {
                println!("{}  {line}{}", palette.accent, palette.reset);
            }
        }
        None => {
            println!(
                "{}No component selected. Use 'select COMPONENT STORY'.{}",
                palette.dimmed, palette.reset
            );
        }
    }
}

fn print_controls(session: &SessionHandle) {
    let widgets = control_widgets(session);
    if widgets.is_empty() {
        println!("No controls. Select a story first.");
        return;
    }
    for widget in widgets {
        println!("  {}", widget.describe());
    }
}

fn set_prop(session: &SessionHandle, prop: &str, raw: &str) {
    let widget = control_widgets(session)
        .into_iter()
        .find(|w| w.prop() == prop);
    match widget {
        Some(widget) => {
            if !widget.apply(session, raw) {
                println!("value not accepted for {prop}");
            }
        }
        None => println!("no editable control for {prop}"),
    }
}

fn invoke_action(session: &SessionHandle, prop: &str, raw_args: &str) {
    let props = effective_props(session);
    let Some(proxy) = props.get(prop).and_then(|p| p.as_action()) else {
        println!("no action prop named {prop}");
        return;
    };
    let args = if raw_args.trim().is_empty() {
        Vec::new()
    } else {
        match serde_json::from_str(raw_args.trim()) {
            Ok(value) => vec![ActionArg::Value(value)],
            Err(_) => vec![ActionArg::value(serde_json::json!(raw_args.trim()))],
        }
    };
    proxy.invoke(&args);
    if let Some(last) = session.log_messages().last() {
        println!("  {last}");
    }
}
