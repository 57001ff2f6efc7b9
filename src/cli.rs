// src/cli.rs
use std::{error::Error, io::Write, path::PathBuf};

use crate::config::options::{AppOptions, DataSource, NotesBackend};
use crate::notes::{self, NoteKey};
use crate::{dataset, render};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Search(String),
    NoteGet(NoteKey),
    NoteSet(NoteKey, String),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cli {
    pub options: AppOptions,
    pub command: Command,
}

pub fn help() -> &'static str {
    include_str!("cli_help.txt")
}

pub fn parse_args<I>(args: I) -> Result<Cli, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut options = AppOptions::default();
    let mut rest: Vec<String> = Vec::new();

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        // Everything after the subcommand is positional
        if !rest.is_empty() {
            rest.push(a);
            continue;
        }
        match a.as_str() {
            "-d" | "--data" => {
                let v = args.next().ok_or("Missing value for --data")?;
                options.data = DataSource::parse(&v)?;
            }
            "-n" | "--notes" => {
                let v = args.next().ok_or("Missing value for --notes")?;
                options.notes = NotesBackend::File(PathBuf::from(v));
            }
            "--ephemeral" => options.notes = NotesBackend::Memory,
            "-h" | "--help" => return Ok(Cli { options, command: Command::Help }),
            s if s.starts_with('-') && s.len() > 1 => return Err(format!("Unknown arg: {}", a).into()),
            other => rest.push(s!(other)),
        }
    }

    let command = parse_command(rest)?;
    Ok(Cli { options, command })
}

fn parse_command(words: Vec<String>) -> Result<Command, Box<dyn Error>> {
    let mut words = words.into_iter();
    let cmd = words.next().ok_or("Missing command (search | note)")?;

    match cmd.as_str() {
        // Empty query is still a valid search; it renders the prompt
        "search" => Ok(Command::Search(words.collect::<Vec<_>>().join(" "))),
        "note" => {
            let sub = words.next().ok_or("Missing note command (get | set)")?;
            let subject = words.next().ok_or("Missing member name")?;
            let staff = words.next().ok_or("Missing staff name")?;
            let key = NoteKey::new(subject, staff);
            match sub.as_str() {
                "get" => match words.next() {
                    None => Ok(Command::NoteGet(key)),
                    Some(extra) => Err(format!("Unexpected arg: {}", extra).into()),
                },
                "set" => Ok(Command::NoteSet(key, words.collect::<Vec<_>>().join(" "))),
                other => Err(format!("Unknown note command: {}", other).into()),
            }
        }
        other => Err(format!("Unknown command: {}", other).into()),
    }
}

pub fn run(cli: Cli, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Help => {
            write!(out, "{}", help())?;
        }
        Command::Search(query) => {
            let ds = dataset::load(&cli.options.data)?;
            let store = notes::open(&cli.options.notes)?;
            let doc = render::search_and_render(&query, &ds, &store);
            write!(out, "{}", doc)?;
        }
        Command::NoteGet(key) => {
            let store = notes::open(&cli.options.notes)?;
            writeln!(out, "{}", store.load(&key))?;
        }
        Command::NoteSet(key, text) => {
            let mut store = notes::open(&cli.options.notes)?;
            store.save(&key, &text);
            writeln!(out, "{}", render::NOTE_SAVED)?;
        }
    }
    Ok(())
}
