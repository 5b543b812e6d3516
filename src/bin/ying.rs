//! Command-line interface for Ying
//!
//! Usage:
//!   ying init [directory] [--type console|library] [-f|--force]  - Initialize a new project
//!   ying doctor                                                  - Show information about the environment
//!   ying parse `<path>` [--format `<format>`]                      - Parse a source file and print it
//!   ying formats                                                 - List available output formats
//!
//! Logs go to stderr. The level defaults to `info`, `DEBUG=1` raises it to
//! `debug`, and `RUST_LOG` overrides both.

use clap::{Arg, ArgAction, Command};
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

use ying::ying::processor::{available_formats, process_source, ProcessingError, ProcessingSpec};
use ying::ying::project::{
    ProjectConfiguration, ProjectType, DEFAULT_PROJECT_CONFIGURATION_FILE_NAME,
};

const CONSOLE_TEMPLATE: &str = r#"import { stdout } from "package:std/system";

export function main(program_arguments: Array<string>): int {
    stdout.write_line("Hello world!");

    return 0;
}
"#;

const LIBRARY_TEMPLATE: &str = "export function my_function(): void {\n}\n";

fn main() {
    init_logging();

    let matches = Command::new("ying")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tooling for the Ying programming language")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("init")
                .about("Initializes a new Ying project")
                .arg(
                    Arg::new("directory")
                        .help("Project directory")
                        .default_value("./")
                        .index(1),
                )
                .arg(
                    Arg::new("type")
                        .long("type")
                        .help("Kind of project to create")
                        .value_parser(["console", "library"])
                        .default_value("console"),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .short('f')
                        .help("Create the project even if the directory is not empty")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("doctor").about("Returns information about the current environment"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a Ying source file and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the Ying file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format (e.g., 'ast-tag', 'token-simple')")
                        .default_value("ast-tag"),
                ),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("init", init_matches)) => {
            let directory = init_matches
                .get_one::<String>("directory")
                .map(String::as_str)
                .unwrap_or("./");
            let project_type = match init_matches.get_one::<String>("type").map(String::as_str) {
                Some("library") => ProjectType::Library,
                _ => ProjectType::Console,
            };
            handle_init_command(
                Path::new(directory),
                project_type,
                init_matches.get_flag("force"),
            )
        }
        Some(("doctor", _)) => {
            handle_doctor_command();
            Ok(())
        }
        Some(("parse", parse_matches)) => {
            let path = parse_matches
                .get_one::<String>("path")
                .map(String::as_str)
                .unwrap_or_default();
            let format = parse_matches
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or("ast-tag");
            handle_parse_command(path, format)
        }
        Some(("formats", _)) => {
            handle_formats_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(message) = result {
        tracing::error!("{}", message);
        process::exit(1);
    }
}

fn init_logging() {
    let default_level = if std::env::var("DEBUG").is_ok_and(|value| value == "1") {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Handle the init command
fn handle_init_command(
    directory: &Path,
    project_type: ProjectType,
    is_force: bool,
) -> Result<(), String> {
    let project_directory = absolute(directory)?;

    tracing::debug!(directory = %project_directory.display(), "using project directory");
    tracing::debug!(force = is_force, "force creating project");

    let does_directory_exist = project_directory.exists();
    let amount_of_files = if does_directory_exist {
        fs::read_dir(&project_directory)
            .map_err(|e| format!("Error reading directory: {}", e))?
            .count()
    } else {
        0
    };

    if amount_of_files > 0 && !is_force {
        return Err(format!(
            "Directory {} is not empty and the force flag is not set",
            project_directory.display()
        ));
    }

    tracing::info!(
        "Creating a new {} project in directory {}",
        project_type,
        project_directory.display()
    );

    if amount_of_files > 0 {
        tracing::warn!("Force creating new project in non-empty directory");
    }

    let default_name = project_directory
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut configuration = ProjectConfiguration {
        project_type,
        name: default_name.clone(),
        description: String::new(),
        version: "0.0.0".to_string(),
        license: "proprietary".to_string(),
        entrypoint: "./src/main.ya".to_string(),
        scripts: Default::default(),
    };

    if !is_force {
        let mut input = io::stdin().lock();
        let answers = [
            (format!("Project Name (default: {}): ", default_name), &mut configuration.name),
            ("Project description: ".to_string(), &mut configuration.description),
            ("Project version (default: 0.0.0): ".to_string(), &mut configuration.version),
            (
                "Project license (default: proprietary): ".to_string(),
                &mut configuration.license,
            ),
        ];
        for (prompt, field) in answers {
            match prompt_user(&mut input, &prompt) {
                Some(answer) if !answer.is_empty() => *field = answer,
                Some(_) => {}
                None => return Err("Aborted: no input available".to_string()),
            }
        }
    }

    if !does_directory_exist {
        fs::create_dir_all(&project_directory)
            .map_err(|e| format!("Error creating directory: {}", e))?;
    }

    configuration
        .write(&project_directory.join(DEFAULT_PROJECT_CONFIGURATION_FILE_NAME))
        .map_err(|e| format!("Error writing project configuration: {}", e))?;

    let main_file_path = project_directory.join("src").join("main.ya");
    if !main_file_path.exists() {
        let contents = match project_type {
            ProjectType::Console => CONSOLE_TEMPLATE,
            ProjectType::Library => LIBRARY_TEMPLATE,
        };
        fs::create_dir_all(project_directory.join("src"))
            .and_then(|_| fs::write(&main_file_path, contents))
            .map_err(|e| format!("Error writing {}: {}", main_file_path.display(), e))?;
    }

    Ok(())
}

/// Ask for one line on stdin. `None` when stdin is closed.
fn prompt_user(input: &mut impl BufRead, prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn absolute(path: &Path) -> Result<PathBuf, String> {
    let current = std::env::current_dir().map_err(|e| format!("Error: {}", e))?;
    let joined = current.join(path);
    Ok(fs::canonicalize(&joined).unwrap_or(joined))
}

/// Handle the doctor command
fn handle_doctor_command() {
    tracing::info!("Using Ying version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Using platform: {} ({})",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    if let Ok(current) = std::env::current_dir() {
        match ProjectConfiguration::find_in_path(&current) {
            Some(path) => tracing::info!("Using project configuration: {}", path.display()),
            None => tracing::info!("No project configuration found"),
        }
    }
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: &str) -> Result<(), String> {
    let spec = ProcessingSpec::from_string(format).map_err(|e| format!("Error: {}", e))?;
    let source = fs::read_to_string(path).map_err(|e| format!("Error reading file: {}", e))?;

    match process_source(&source, &spec) {
        Ok(output) => {
            println!("{}", output.trim_end_matches('\n'));
            Ok(())
        }
        Err(ProcessingError::Syntax(error)) => {
            let (line, column) = error.location(&source);
            Err(format!("{}:{}:{}: {}", path, line, column, error))
        }
        Err(e) => Err(format!("Error: {}", e)),
    }
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
