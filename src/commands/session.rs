//! Interactive session
//!
//! Reads one command per line, turns it into an [`Action`] and redraws the
//! active view. The feedback timer is ticked around every command, so a
//! message disappears on the first redraw after it expired.

use super::{Result, open_app};
use crate::app::{Action, App, View};
use crate::config::AlmaConfig;
use crate::db::Database;
use crate::output;
use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};
use std::io::{self, BufRead, IsTerminal};

const HELP: &str = "\
Comandos:
  n            nova frase
  c            copiar frase
  f            adicionar aos favoritos
  s            compartilhar
  cat [NOME]   listar categorias ou filtrar por uma
  v            alternar entre frases e favoritos
  /TEXTO       buscar nos favoritos (/ sozinho limpa a busca)
  rm N         remover o favorito N da lista visível
  x            fechar a mensagem
  h            ajuda
  q            sair";

/// One parsed line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Act(Action),
    Categories,
    Help,
    Show,
    Quit,
}

/// Parse a session input line
///
/// # Errors
/// Returns a message for unknown commands or bad arguments.
pub fn parse_line(line: &str) -> std::result::Result<SessionCommand, String> {
    let line = line.trim();
    if let Some(query) = line.strip_prefix('/') {
        return Ok(SessionCommand::Act(Action::Search(query.trim().to_string())));
    }

    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    let action = match (command.to_lowercase().as_str(), argument) {
        ("", _) => return Ok(SessionCommand::Show),
        ("q" | "quit" | "sair", _) => return Ok(SessionCommand::Quit),
        ("h" | "?" | "help" | "ajuda", _) => return Ok(SessionCommand::Help),
        ("cat" | "categoria", "") => return Ok(SessionCommand::Categories),
        ("cat" | "categoria", name) => {
            Action::SetCategory(name.parse().map_err(|e| format!("{e}"))?)
        }
        ("n" | "nova" | "new", _) => Action::NewPhrase,
        ("c" | "copiar" | "copy", _) => Action::Copy,
        ("f" | "fav" | "favoritar", _) => Action::Favorite,
        ("s" | "share" | "compartilhar", _) => Action::Share,
        ("v" | "view", _) => Action::ToggleView,
        ("x" | "fechar", _) => Action::DismissFeedback,
        ("rm" | "remover", number) => {
            let index = number
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .ok_or_else(|| format!("Número inválido: '{number}'"))?;
            Action::RemoveFavorite(index)
        }
        (other, _) => return Err(format!("Comando desconhecido: '{other}' (h para ajuda)")),
    };
    Ok(SessionCommand::Act(action))
}

/// Run the interactive session until `q` or end of input
///
/// # Errors
/// Returns an error if the session cannot start or input cannot be read.
pub fn execute(config: &AlmaConfig, quiet: bool) -> Result<()> {
    let mut app = open_app(config)?;
    let interactive = io::stdin().is_terminal();

    if !quiet {
        println!("Alma Lux - um lugar de calmaria e leitura (h para ajuda)");
    }
    render(&app, quiet);

    while let Some(line) = read_command(interactive)? {
        app.tick();
        match parse_line(&line) {
            Ok(SessionCommand::Quit) => break,
            Ok(SessionCommand::Help) => println!("{HELP}"),
            Ok(SessionCommand::Categories) => {
                for filter in app.categories() {
                    let active = filter == app.state().category;
                    println!("{}", output::category_line(filter, active, quiet));
                }
            }
            Ok(SessionCommand::Show) => {}
            Ok(SessionCommand::Act(action)) => {
                if let Err(e) = app.dispatch(action) {
                    eprintln!("{} {e}", "❌".red());
                }
            }
            Err(message) => eprintln!("{} {message}", "⚠️".yellow()),
        }
        app.tick();
        render(&app, quiet);
    }
    Ok(())
}

fn read_command(interactive: bool) -> Result<Option<String>> {
    if interactive {
        return match Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("alma")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => Ok(Some(line)),
            Err(e) if is_end_of_input(&e) => Ok(None),
            Err(e) => Err(io::Error::other(format!("Failed to read input: {e}")).into()),
        };
    }

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// A closed terminal or Ctrl-C at the prompt ends the session like end of piped input
fn is_end_of_input(error: &dialoguer::Error) -> bool {
    matches!(
        error,
        dialoguer::Error::IO(e)
            if matches!(e.kind(), io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted)
    )
}

fn render(app: &App<Database>, quiet: bool) {
    match app.state().view {
        View::Home => {
            if !quiet {
                println!("{}", app.state().category.label().dimmed());
            }
            println!("{}", output::phrase_card(app.current(), quiet));
        }
        View::Favorites => {
            if !quiet {
                let query = &app.state().query;
                if query.is_empty() {
                    println!("{}", "Minhas Frases".bold());
                } else {
                    println!("{} {}", "Minhas Frases".bold(), format!("(busca: {query})").dimmed());
                }
            }
            let mut shown = 0;
            for (position, favorite) in app.visible_favorites().enumerate() {
                println!("{}", output::favorite_line(position, favorite, quiet));
                shown += 1;
            }
            if shown == 0 && !quiet {
                println!("{}", output::empty_favorites(&app.state().query));
            }
        }
    }
    if !quiet && let Some(message) = app.feedback().current() {
        println!("{}", output::feedback_line(message));
    }
}
