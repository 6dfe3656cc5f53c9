mod highlighter;
mod render;
mod repl;

use clap::Parser;
use devgourmet::{
    Engine, EngineOptions, ExecutionOptions, Session, SourceEdit, recipes, render_diagnostics,
};
use highlighter::Highlighter;
use miette::{IntoDiagnostic, Result, WrapErr, miette};
use reedline::{
    DefaultCompleter, DefaultPrompt, DefaultPromptSegment, DescriptionMode, Emacs, IdeMenu,
    KeyCode, KeyModifiers, Keybindings, MenuBuilder, Reedline, ReedlineEvent, ReedlineMenu, Signal,
    default_emacs_keybindings,
};
use repl::{Command, parse_assignment};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// DevGourmet - recipes as code
#[derive(Parser, Debug)]
#[command(name = "devgourmet")]
#[command(about = "Run DevGourmet recipe scripts", long_about = None)]
struct Args {
    /// Recipe file to run ("-" reads stdin). Defaults to the pancakes sample.
    file: Option<PathBuf>,

    /// Run a bundled sample recipe instead of a file (pancakes, spaghetti, cookies)
    #[arg(long, conflicts_with = "file")]
    sample: Option<String>,

    /// Change a variable before printing, e.g. --set servings=2 (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    set: Vec<(String, f64)>,

    /// Print the recipe as JSON
    #[arg(long)]
    json: bool,

    /// Start an interactive session even when a file is given
    #[arg(short, long)]
    interactive: bool,

    /// Print the parsed program (for debugging)
    #[arg(long)]
    debug_parse: bool,
}

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
}

fn setup_reedline(session: &Session<'_>) -> (Reedline, DefaultPrompt) {
    let mut commands: Vec<String> = [":show", ":source", ":json", ":help", ":quit"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    commands.extend(session.output().variables.iter().map(|v| v.name.clone()));

    let completer = Box::new({
        let mut completions = DefaultCompleter::with_inclusions(&[':', '_']);
        completions.insert(commands);
        completions
    });

    let ide_menu = IdeMenu::default()
        .with_name("completion_menu")
        .with_min_completion_width(0)
        .with_max_completion_width(50)
        .with_padding(0)
        .with_description_mode(DescriptionMode::PreferRight);

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    let line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(Box::new(ide_menu)))
        .with_edit_mode(Box::new(Emacs::new(keybindings)));

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("recipe".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

fn read_stdin() -> Result<String> {
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .into_diagnostic()?;
    Ok(source)
}

fn load_source(args: &Args) -> Result<String> {
    if let Some(id) = &args.sample {
        let sample = recipes::find(id).ok_or_else(|| miette!("No sample recipe named '{}'", id))?;
        return Ok(sample.source.to_string());
    }
    match &args.file {
        Some(path) if path.as_os_str() == "-" => read_stdin(),
        Some(path) => std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("reading {}", path.display())),
        None if !atty::is(atty::Stream::Stdin) => read_stdin(),
        None => Ok(recipes::PANCAKES.to_string()),
    }
}

fn print_output(session: &Session<'_>, json: bool) -> Result<()> {
    write_output(
        session,
        json,
        &mut std::io::stdout(),
        atty::is(atty::Stream::Stdout),
        &mut std::io::stderr(),
        atty::is(atty::Stream::Stderr),
    )
    .into_diagnostic()
}

/// Writes the recipe to `out` (text or JSON) and its diagnostics to `err`,
/// so JSON output stays parseable.
fn write_output(
    session: &Session<'_>,
    json: bool,
    out: &mut dyn Write,
    out_color: bool,
    err: &mut dyn Write,
    err_color: bool,
) -> std::io::Result<()> {
    let output = session.output();
    if json {
        let text = serde_json::to_string_pretty(output).map_err(std::io::Error::other)?;
        writeln!(out, "{}", text)?;
    } else {
        render::render(output, out, out_color)?;
    }

    if output.diagnostics.is_empty() {
        return Ok(());
    }
    writeln!(err)?;
    render_diagnostics(session.source(), &output.diagnostics, err, err_color)
}

fn print_source(source: &str) {
    for (index, line) in source.lines().enumerate() {
        println!("{:>4} | {}", index + 1, line);
    }
}

fn run_interactive(session: &mut Session<'_>) -> Result<()> {
    let (mut line_editor, prompt) = setup_reedline(session);

    println!("DevGourmet session - change a variable with `name = value`, :help for commands");
    print_output(session, false)?;

    loop {
        let sig = match line_editor.read_line(&prompt) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Reedline error: {e}");
                return Ok(());
            }
        };

        let buffer = match sig {
            Signal::Success(buffer) => buffer,
            Signal::CtrlD | Signal::CtrlC => {
                println!("\nGoodbye!");
                return Ok(());
            }
        };
        if buffer.trim().is_empty() {
            continue;
        }

        match buffer.parse::<Command>() {
            Ok(Command::Set { name, value }) => match session.update_variable(&name, value) {
                Ok(SourceEdit::Rewritten) => print_output(session, false)?,
                Ok(SourceEdit::Unchanged) => {
                    println!("(declaration of {} left as written; value applied)", name);
                    print_output(session, false)?;
                }
                Err(e) => eprintln!("{}", e),
            },
            Ok(Command::Show) => print_output(session, false)?,
            Ok(Command::Source) => print_source(session.source()),
            Ok(Command::Json) => print_output(session, true)?,
            Ok(Command::Help) => println!("{}", repl::HELP),
            Ok(Command::Quit) => return Ok(()),
            Err(e) => eprintln!("{}", e),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use DEVGOURMET_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("DEVGOURMET_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let source = load_source(&args)?;

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let engine = Engine::new(EngineOptions {
        execution: ExecutionOptions {
            timestamp,
            ..Default::default()
        },
        ..Default::default()
    });

    if args.debug_parse {
        match engine.compile(&source) {
            Ok(program) => {
                println!("=== Parsed program ===");
                println!("{:#?}", program);
                println!();
            }
            Err(e) => devgourmet::render_error(&e, &source),
        }
    }

    let mut session = Session::new(&engine, source);
    for (name, value) in &args.set {
        session.update_variable(name, *value).into_diagnostic()?;
    }

    let interactive = args.interactive
        || (args.file.is_none()
            && args.sample.is_none()
            && !args.json
            && atty::is(atty::Stream::Stdin));
    if interactive {
        return run_interactive(&mut session);
    }

    print_output(&session, args.json)?;

    let errors = session
        .output()
        .diagnostics
        .iter()
        .filter(|d| d.severity == devgourmet::Severity::Error)
        .count();
    if errors > 0 {
        return Err(miette!("recipe has {} error(s)", errors));
    }
    Ok(())
}
