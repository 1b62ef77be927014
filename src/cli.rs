//! Line-oriented command driver for a [`DesignerState`].
//!
//! Stands in for an interactive surface: each stdin line is one user action
//! (a click, a color pick, a button press) applied to the session.

use anyhow::{anyhow, bail, Context};
use layoutkit_core::{LayoutId, UserId};
use layoutkit_designer::{DesignerState, Selection};
use layoutkit_settings::KeyValueStore;
use std::io::Write;

/// Smallest width or height accepted by `resize`.
pub const MIN_SHAPE_SIZE: f64 = 5.0;

pub const HELP: &str = "\
Commands:
  users                 list registered users
  login <name>          register a user and sign in
  switch <user-id>      sign in as an existing user
  logout                sign out (clears the canvas)
  whoami                show the active user
  shapes                list shapes in draw order (* = selected)
  add                   add a random shape
  select <index>        select a shape by position
  click <x> <y>         click the canvas
  deselect              clear the selection
  move <x> <y>          move the selected shape
  resize <w> <h>        resize the selected shape
  color <hex>           recolor the selected shape
  remove                delete the selected shape
  clear                 delete every shape
  save <name>           save the canvas as a layout
  layouts               list your layouts
  load <layout-id>      replace the canvas with a layout
  delete <layout-id>    delete a layout
  help                  show this text
  quit                  exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Users,
    Login(String),
    Switch(UserId),
    Logout,
    WhoAmI,
    Shapes,
    Add,
    Select(usize),
    Click(f64, f64),
    Deselect,
    Move(f64, f64),
    Resize(f64, f64),
    Color(String),
    Remove,
    Clear,
    Save(String),
    Layouts,
    Load(LayoutId),
    Delete(LayoutId),
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "users" => Self::Users,
            "login" => Self::Login(rest.to_string()),
            "switch" => Self::Switch(rest.parse().context("expected a user id")?),
            "logout" => Self::Logout,
            "whoami" => Self::WhoAmI,
            "shapes" | "ls" => Self::Shapes,
            "add" => Self::Add,
            "select" => Self::Select(rest.parse().context("expected a shape index")?),
            "click" => {
                let (x, y) = two_numbers(rest)?;
                Self::Click(x, y)
            }
            "deselect" => Self::Deselect,
            "move" => {
                let (x, y) = two_numbers(rest)?;
                Self::Move(x, y)
            }
            "resize" => {
                let (w, h) = two_numbers(rest)?;
                Self::Resize(w, h)
            }
            "color" => Self::Color(rest.to_string()),
            "remove" | "rm" => Self::Remove,
            "clear" => Self::Clear,
            "save" => Self::Save(rest.to_string()),
            "layouts" => Self::Layouts,
            "load" => Self::Load(rest.parse().context("expected a layout id")?),
            "delete" => Self::Delete(rest.parse().context("expected a layout id")?),
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command '{}' (try 'help')", other),
        };
        Ok(Some(command))
    }
}

fn two_numbers(rest: &str) -> anyhow::Result<(f64, f64)> {
    let mut parts = rest.split_whitespace();
    let mut next = |what: &str| -> anyhow::Result<f64> {
        let part = parts.next().ok_or_else(|| anyhow!("missing {}", what))?;
        let value: f64 = part
            .parse()
            .with_context(|| format!("invalid {} '{}'", what, part))?;
        if !value.is_finite() {
            bail!("invalid {} '{}'", what, part);
        }
        Ok(value)
    };
    let a = next("first number")?;
    let b = next("second number")?;
    Ok((a, b))
}

/// Whether the driver loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Applies `command` to `state`, writing user-facing output to `out`.
///
/// Rejected input (blank names, bad colors, no active user) is reported on
/// `out` and is not an error; only I/O failures propagate.
pub fn execute<S: KeyValueStore>(
    state: &mut DesignerState<S>,
    command: Command,
    out: &mut impl Write,
) -> anyhow::Result<Flow> {
    let result = apply(state, command, out);
    match result {
        Ok(flow) => Ok(flow),
        Err(err) => match err.downcast::<layoutkit_core::Error>() {
            Ok(err @ layoutkit_core::Error::Io(_)) => Err(err.into()),
            Ok(err) => {
                writeln!(out, "error: {}", err)?;
                Ok(Flow::Continue)
            }
            Err(err) => Err(err),
        },
    }
}

fn apply<S: KeyValueStore>(
    state: &mut DesignerState<S>,
    command: Command,
    out: &mut impl Write,
) -> anyhow::Result<Flow> {
    match command {
        Command::Users => {
            let users = state.users()?;
            if users.is_empty() {
                writeln!(out, "no users")?;
            }
            for user in users {
                writeln!(out, "{}  {}", user.id, user.name)?;
            }
        }
        Command::Login(name) => {
            let user = state.sign_in(&name)?;
            writeln!(out, "signed in as {} ({})", user.name, user.id)?;
        }
        Command::Switch(id) => {
            let user = state.switch_user(id)?;
            writeln!(out, "signed in as {} ({})", user.name, user.id)?;
        }
        Command::Logout => {
            state.sign_out()?;
            writeln!(out, "signed out")?;
        }
        Command::WhoAmI => match state.current_user() {
            Some(user) => writeln!(out, "{} ({})", user.name, user.id)?,
            None => writeln!(out, "not signed in")?,
        },
        Command::Shapes => write_shapes(state, out)?,
        Command::Add => {
            let id = state.add_shape();
            writeln!(out, "added {}", id)?;
        }
        Command::Select(index) => match state.canvas.select_index(index) {
            Some(_) => writeln!(out, "selected {}", index)?,
            None => writeln!(out, "no shape at {}", index)?,
        },
        Command::Click(x, y) => {
            state.canvas.click_at(x, y);
            write_selection(state, out)?;
        }
        Command::Deselect => {
            state.canvas.on_deselect();
            write_selection(state, out)?;
        }
        Command::Move(x, y) => {
            if !state.canvas.move_selected_to(x, y) {
                writeln!(out, "nothing selected")?;
            }
        }
        Command::Resize(width, height) => {
            let updated = state
                .canvas
                .selected_shape()
                .map(|shape| shape.resized(width, height).clamped(MIN_SHAPE_SIZE));
            match updated {
                Some(shape) => {
                    state.canvas.on_change(shape);
                }
                None => writeln!(out, "nothing selected")?,
            }
        }
        Command::Color(value) => {
            if !state.canvas.on_color_change(&value)? {
                writeln!(out, "nothing selected")?;
            }
        }
        Command::Remove => match state.remove_selected() {
            Some(id) => writeln!(out, "removed {}", id)?,
            None => writeln!(out, "nothing selected")?,
        },
        Command::Clear => {
            state.clear();
            writeln!(out, "cleared")?;
        }
        Command::Save(name) => {
            let layout = state.save_layout(&name)?;
            writeln!(
                out,
                "saved '{}' ({} shapes) as {}",
                layout.name,
                layout.rects.len(),
                layout.id
            )?;
        }
        Command::Layouts => {
            let layouts = state.layouts()?;
            if layouts.is_empty() {
                writeln!(out, "no layouts")?;
            }
            for layout in layouts {
                writeln!(
                    out,
                    "{}  {}  ({} shapes, {})",
                    layout.id,
                    layout.name,
                    layout.rects.len(),
                    layout.created.format("%Y-%m-%d %H:%M")
                )?;
            }
        }
        Command::Load(id) => {
            if state.load_layout(id)? {
                writeln!(out, "loaded {} shapes", state.canvas.shape_count())?;
            } else {
                writeln!(out, "no such layout")?;
            }
        }
        Command::Delete(id) => {
            if state.delete_layout(id)? {
                writeln!(out, "deleted")?;
            } else {
                writeln!(out, "no such layout")?;
            }
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn write_shapes<S: KeyValueStore>(
    state: &DesignerState<S>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let props = state.canvas.shape_props();
    if props.is_empty() {
        writeln!(out, "canvas is empty")?;
    }
    for props in props {
        let shape = props.shape;
        writeln!(
            out,
            "{}{:>3}  x={:<7.1} y={:<7.1} w={:<7.1} h={:<7.1} {}",
            if props.is_selected { '*' } else { ' ' },
            props.index,
            shape.x,
            shape.y,
            shape.width,
            shape.height,
            shape.color
        )?;
    }
    Ok(())
}

fn write_selection<S: KeyValueStore>(
    state: &DesignerState<S>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match state.canvas.selection() {
        Selection::Selected(index) => writeln!(out, "selected {}", index)?,
        Selection::Idle => writeln!(out, "nothing selected")?,
    }
    Ok(())
}
