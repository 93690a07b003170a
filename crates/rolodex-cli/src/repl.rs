//! Interactive REPL (Read-Eval-Print Loop) for Rolodex.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::path::PathBuf;

use rolodex_store::UserStore;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing::{debug, info, warn};

use crate::cli::OutputFormat;
use crate::commands::Result;
use crate::render::{user_card, write_users};

const PROMPT: &str = "> ";

/// Tab completion for command words.
pub struct CommandCompleter;

impl CommandCompleter {
    const COMMANDS: &'static [&'static str] = &[
        "add", "delete", "exit", "get", "help", "list", "search", "update",
    ];
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        // Only the command word is completed
        if prefix.contains(char::is_whitespace) {
            return Ok((pos, vec![]));
        }

        let prefix = prefix.to_lowercase();
        let matches: Vec<Pair> = Self::COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(&prefix))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, matches))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}
impl Validator for CommandCompleter {}
impl Helper for CommandCompleter {}

/// Source of the per-field answers that `add` and `update` ask for.
pub trait FieldSource {
    /// Shows `prompt` and reads one line.
    fn read_field(&mut self, prompt: &str) -> rustyline::Result<String>;
}

impl FieldSource for Editor<CommandCompleter, DefaultHistory> {
    fn read_field(&mut self, prompt: &str) -> rustyline::Result<String> {
        self.readline(prompt)
    }
}

/// Pre-recorded answers, for scripted sessions. Runs dry with EOF.
impl FieldSource for VecDeque<String> {
    fn read_field(&mut self, _prompt: &str) -> rustyline::Result<String> {
        self.pop_front().ok_or(ReadlineError::Eof)
    }
}

/// Commands available in the REPL.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Prompt for fields and add a user
    Add,
    /// Show one user
    Get(Option<String>),
    /// List all users
    List,
    /// Delete a user
    Delete(Option<String>),
    /// Prompt for fields and replace a user's details
    Update(Option<String>),
    /// Search by text (words joined with single spaces)
    Search(Option<String>),
    /// Show help
    Help,
    /// Save and quit
    Exit,
    /// Unknown command word
    Unknown(String),
    /// Blank line
    Empty,
}

impl ReplCommand {
    /// Parses a line of input into a REPL command.
    pub fn parse(input: &str) -> Self {
        let mut words = input.split_whitespace();
        let Some(cmd) = words.next() else {
            return ReplCommand::Empty;
        };
        let first_arg = words.clone().next().map(str::to_string);

        match cmd.to_lowercase().as_str() {
            "add" => ReplCommand::Add,
            "get" => ReplCommand::Get(first_arg),
            "list" => ReplCommand::List,
            "delete" => ReplCommand::Delete(first_arg),
            "update" => ReplCommand::Update(first_arg),
            "search" => {
                let query = words.collect::<Vec<_>>().join(" ");
                ReplCommand::Search(Some(query).filter(|q| !q.is_empty()))
            }
            "help" => ReplCommand::Help,
            "exit" | "quit" => ReplCommand::Exit,
            _ => ReplCommand::Unknown(cmd.to_string()),
        }
    }
}

/// What the REPL loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Command dispatcher over a user store.
///
/// Store errors are written to the output as `Error: ...` and never end the
/// session. Only output failures and the final save on exit propagate.
pub struct Shell {
    store: UserStore,
    path: PathBuf,
}

impl Shell {
    /// Creates a shell that saves `store` to `path` on exit.
    pub fn new(store: UserStore, path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            path: path.into(),
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &UserStore {
        &self.store
    }

    /// Saves the store to its file.
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.path)?;
        info!(path = %self.path.display(), users = self.store.len(), "Saved users");
        Ok(())
    }

    /// Handles one command.
    pub fn dispatch<F, W>(&mut self, cmd: ReplCommand, fields: &mut F, out: &mut W) -> Result<Flow>
    where
        F: FieldSource,
        W: Write,
    {
        match cmd {
            ReplCommand::Empty => {}

            ReplCommand::Exit => {
                self.save()?;
                writeln!(out, "Bye!")?;
                return Ok(Flow::Exit);
            }

            ReplCommand::Help => print_help(out)?,

            ReplCommand::Add => {
                let Some((name, phone, city)) = read_contact(fields, out)? else {
                    return Ok(Flow::Continue);
                };
                match self.store.create(&name, &phone, &city) {
                    Ok(user) => {
                        info!(id = %user.id, "Added user");
                        writeln!(out, "Added: {}", user_card(&user))?;
                    }
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
            }

            ReplCommand::List => {
                let users = self.store.list();
                if users.is_empty() {
                    writeln!(out, "Catalog is empty")?;
                } else {
                    write_users(out, &users, OutputFormat::Table)?;
                }
            }

            ReplCommand::Get(arg) => {
                let Some(id) = parse_id(arg.as_deref(), "get", out)? else {
                    return Ok(Flow::Continue);
                };
                match self.store.find(id) {
                    Ok(user) => writeln!(out, "Found: {}", user_card(&user))?,
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
            }

            ReplCommand::Delete(arg) => {
                let Some(id) = parse_id(arg.as_deref(), "delete", out)? else {
                    return Ok(Flow::Continue);
                };
                match self.store.delete(id) {
                    Ok(user) => {
                        info!(id = %user.id, "Deleted user");
                        writeln!(out, "Deleted: {}", user_card(&user))?;
                    }
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
            }

            ReplCommand::Update(arg) => {
                let Some(id) = parse_id(arg.as_deref(), "update", out)? else {
                    return Ok(Flow::Continue);
                };
                let Some((name, phone, city)) = read_contact(fields, out)? else {
                    return Ok(Flow::Continue);
                };
                match self.store.update(id, &name, &phone, &city) {
                    Ok(user) => {
                        info!(id = %user.id, "Updated user");
                        writeln!(out, "Updated: {}", user_card(&user))?;
                    }
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
            }

            ReplCommand::Search(None) => writeln!(out, "Usage: search <text>")?,

            ReplCommand::Search(Some(query)) => match self.store.search(&query) {
                Ok(users) => write_users(out, &users, OutputFormat::Table)?,
                Err(e) => writeln!(out, "Error: {}", e)?,
            },

            ReplCommand::Unknown(cmd) => {
                debug!(%cmd, "Unknown command");
                writeln!(out, "Unknown command. Type 'help'.")?;
            }
        }
        Ok(Flow::Continue)
    }
}

/// Checks an id argument before it reaches the store.
///
/// Prints a usage or error line and returns `None` when the argument is
/// missing, not an integer, or not positive.
fn parse_id<W: Write>(arg: Option<&str>, command: &str, out: &mut W) -> io::Result<Option<i64>> {
    let Some(raw) = arg else {
        writeln!(out, "Usage: {} <id>", command)?;
        return Ok(None);
    };
    match raw.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(Some(id)),
        Ok(_) => {
            writeln!(out, "Error: id must be positive")?;
            Ok(None)
        }
        Err(_) => {
            writeln!(out, "Error: id must be an integer")?;
            Ok(None)
        }
    }
}

/// Prompts for name, phone, and city, stopping at the first blank answer.
fn read_contact<F, W>(fields: &mut F, out: &mut W) -> Result<Option<(String, String, String)>>
where
    F: FieldSource,
    W: Write,
{
    let mut answers: [String; 3] = Default::default();
    for (slot, label) in answers.iter_mut().zip(["Name", "Phone", "City"]) {
        let answer = match fields.read_field(&format!("{}: ", label)) {
            Ok(line) => line.trim().to_string(),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                writeln!(out, "Cancelled")?;
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        if answer.is_empty() {
            writeln!(out, "Error: {} cannot be empty", label)?;
            return Ok(None);
        }
        *slot = answer;
    }

    let [name, phone, city] = answers;
    Ok(Some((name, phone, city)))
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  add             add new user")?;
    writeln!(out, "  get <id>        show user card by id")?;
    writeln!(out, "  list            show all users")?;
    writeln!(out, "  delete <id>     delete user by id")?;
    writeln!(out, "  update <id>     update user information by id")?;
    writeln!(out, "  search <text>   search name, phone, and city")?;
    writeln!(out, "  help            show this help")?;
    writeln!(out, "  exit            save and exit")?;
    Ok(())
}

/// REPL state
pub struct Repl {
    editor: Editor<CommandCompleter, DefaultHistory>,
    shell: Shell,
    history_path: Option<PathBuf>,
}

impl Repl {
    /// Creates a new REPL instance around a loaded store.
    pub fn new(shell: Shell, history_path: Option<PathBuf>) -> Result<Self> {
        let config = rustyline::Config::builder()
            .completion_type(rustyline::CompletionType::List)
            .auto_add_history(false)
            .build();
        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(CommandCompleter));

        if let Some(path) = history_path.as_ref().filter(|p| p.exists()) {
            if let Err(e) = editor.load_history(path) {
                warn!(path = %path.display(), error = %e, "Failed to load history");
            }
        }

        Ok(Self {
            editor,
            shell,
            history_path,
        })
    }

    /// Runs the REPL loop until `exit` or end of input, then saves.
    pub fn run(&mut self) -> Result<()> {
        println!("Rolodex v{}", env!("CARGO_PKG_VERSION"));
        println!("Type 'help' for commands, 'exit' to save and quit\n");

        let mut stdout = io::stdout();
        loop {
            let cmd = match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.as_str())?;
                    }
                    ReplCommand::parse(&line)
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C only clears the line
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    ReplCommand::Exit
                }
                Err(err) => {
                    self.save_history();
                    return Err(err.into());
                }
            };
            debug!(?cmd, "Parsed command");

            let flow = self.shell.dispatch(cmd, &mut self.editor, &mut stdout)?;
            stdout.flush()?;
            if flow == Flow::Exit {
                break;
            }
        }

        self.save_history();
        Ok(())
    }

    fn save_history(&mut self) {
        if let Some(path) = &self.history_path {
            if let Err(e) = self.editor.save_history(path) {
                warn!(path = %path.display(), error = %e, "Failed to save history");
            }
        }
    }
}
