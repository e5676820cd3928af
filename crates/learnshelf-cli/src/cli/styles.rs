//! Styles for the learnshelf CLI.
//!
//! Code refers to styles by what they mean (an index, a timestamp, a status)
//! rather than by colour, so the look can change in one place. All styles are
//! built once through `once_cell::sync::Lazy`.
//!
//! `console` drops the escape codes by itself when stdout is not a terminal
//! or `NO_COLOR` is set, so piped output stays plain.

use console::Style;
use learnshelf::model::{Level, Priority, Status};
use once_cell::sync::Lazy;

pub static REGULAR: Lazy<Style> = Lazy::new(Style::new);
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().color256(245));
pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static TIME: Lazy<Style> = Lazy::new(|| Style::new().color256(245).italic());
pub static HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold().underlined());
pub static LIST_INDEX: Lazy<Style> = Lazy::new(|| Style::new().color256(178));
pub static FAVORITE: Lazy<Style> = Lazy::new(|| Style::new().color256(220).bold());
pub static LINK: Lazy<Style> = Lazy::new(|| Style::new().cyan().underlined());

pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().color256(245));
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red().bold());

static NOT_STARTED: Lazy<Style> = Lazy::new(|| Style::new().color256(245));
static IN_PROGRESS: Lazy<Style> = Lazy::new(|| Style::new().cyan());
static COMPLETED: Lazy<Style> = Lazy::new(|| Style::new().green());

static HIGH: Lazy<Style> = Lazy::new(|| Style::new().red());
static MEDIUM: Lazy<Style> = Lazy::new(|| Style::new().yellow());

pub fn status(status: Status) -> &'static Style {
    match status {
        Status::NotStarted => &*NOT_STARTED,
        Status::InProgress => &*IN_PROGRESS,
        Status::Completed => &*COMPLETED,
        Status::Unknown => &*MUTED,
    }
}

pub fn priority(priority: Priority) -> &'static Style {
    match priority {
        Priority::High => &*HIGH,
        Priority::Medium => &*MEDIUM,
        Priority::Low | Priority::Unknown => &*MUTED,
    }
}

pub fn level(level: Level) -> &'static Style {
    match level {
        Level::Beginner => &*REGULAR,
        Level::Intermediate => &*IN_PROGRESS,
        Level::Advanced => &*FAVORITE,
        Level::Unknown => &*MUTED,
    }
}
