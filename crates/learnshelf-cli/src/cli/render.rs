//! # Rendering Module
//!
//! Turns command results into terminal text. Every function returns a
//! `String`; printing is left to the handlers so rendering can be tested
//! without capturing stdout.
//!
//! ## List Layout
//!
//! Each row of `list` has fixed-width columns around a flexible title:
//!
//! ```text
//!  12. ◐ The Rust Programming Language ★         40%  intermediate  high    3 days ago
//! ```
//!
//! - `index` (5 chars): display index, right-aligned
//! - `status` (2 chars): status icon
//! - `title` (fill): truncated with `…` to fit [`LINE_WIDTH`]
//! - `progress` (5 chars), `level` (14 chars), `priority` (8 chars)
//! - `time` ([`COL_TIME`] chars): relative creation time
//!
//! Width math uses `unicode-width` so wide characters in titles do not push
//! the columns out of line.

use chrono::{DateTime, Utc};
use learnshelf::commands::{CmdMessage, CmdResult, MessageLevel};
use learnshelf::config::ShelfConfig;
use learnshelf::index::DisplayResource;
use learnshelf::model::{Category, Resource, Status};
use learnshelf::stats::ResourceStats;
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::styles;

pub const LINE_WIDTH: usize = 100;
pub const COL_INDEX: usize = 5;
pub const COL_STATUS: usize = 2;
pub const COL_PROGRESS: usize = 5;
pub const COL_LEVEL: usize = 14;
pub const COL_PRIORITY: usize = 8;
pub const COL_TIME: usize = 15;

pub const ICON_NOT_STARTED: &str = "○";
pub const ICON_IN_PROGRESS: &str = "◐";
pub const ICON_COMPLETED: &str = "●";
pub const ICON_UNKNOWN: &str = "?";
pub const FAVORITE_MARKER: &str = "★";

fn status_icon(status: Status) -> &'static str {
    match status {
        Status::NotStarted => ICON_NOT_STARTED,
        Status::InProgress => ICON_IN_PROGRESS,
        Status::Completed => ICON_COMPLETED,
        Status::Unknown => ICON_UNKNOWN,
    }
}

fn category_name(categories: &[Category], resource: &Resource) -> Option<String> {
    let id = resource.category_id?;
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.clone())
}

/// One-line summary of the whole library, shown above listings.
pub fn render_stats_header(stats: &ResourceStats) -> String {
    let noun = if stats.total == 1 {
        "resource"
    } else {
        "resources"
    };
    format!(
        "{} {} · {} · {} · {}\n",
        styles::TITLE.apply_to(stats.total),
        noun,
        styles::status(Status::InProgress).apply_to(format!("{} in progress", stats.in_progress)),
        styles::status(Status::Completed).apply_to(format!("{} completed", stats.completed)),
        styles::MUTED.apply_to(format!("avg progress {}%", stats.rounded_avg_progress())),
    )
}

/// Renders a `list` result: stats header, one row per resource, messages.
pub fn render_list(result: &CmdResult) -> String {
    let mut out = String::new();

    if let Some(stats) = &result.stats {
        out.push_str(&render_stats_header(stats));
        out.push('\n');
    }

    for dr in &result.listed_resources {
        out.push_str(&render_row(dr));
        out.push('\n');
    }

    out.push_str(&render_messages(&result.messages));
    out
}

fn render_row(dr: &DisplayResource) -> String {
    let r = &dr.resource;

    let index = format!("{:>width$}.", dr.index, width = COL_INDEX - 1);
    let favorite = if r.is_favorite {
        format!(" {}", FAVORITE_MARKER)
    } else {
        String::new()
    };

    let fixed = COL_INDEX + 1 + COL_STATUS + COL_PROGRESS + COL_LEVEL + COL_PRIORITY + COL_TIME;
    let available = LINE_WIDTH.saturating_sub(fixed + favorite.width());
    let title = truncate_to_width(&r.title, available);
    let padding = " ".repeat(available.saturating_sub(title.width()));

    format!(
        "{} {} {}{}{} {} {} {} {}",
        styles::LIST_INDEX.apply_to(index),
        styles::status(r.status).apply_to(status_icon(r.status)),
        styles::REGULAR.apply_to(title),
        styles::FAVORITE.apply_to(favorite),
        padding,
        styles::MUTED.apply_to(format!("{:>4}", r.progress.to_string())),
        styles::level(r.level).apply_to(format!(
            "{:<width$}",
            r.level.as_str(),
            width = COL_LEVEL - 1
        )),
        styles::priority(r.priority).apply_to(format!(
            "{:<width$}",
            r.priority.as_str(),
            width = COL_PRIORITY - 1
        )),
        styles::TIME.apply_to(format!(
            "{:>width$}",
            format_time_ago(r.created_at),
            width = COL_TIME - 1
        )),
    )
}

/// Renders resources in full, as `view` shows them.
pub fn render_full(result: &CmdResult) -> String {
    let blocks: Vec<String> = result
        .listed_resources
        .iter()
        .map(|dr| render_full_resource(dr, &result.categories))
        .collect();
    let mut out = blocks.join("\n");
    out.push_str(&render_messages(&result.messages));
    out
}

fn render_full_resource(dr: &DisplayResource, categories: &[Category]) -> String {
    let r = &dr.resource;
    let mut out = String::new();

    let favorite = if r.is_favorite {
        format!(" {}", styles::FAVORITE.apply_to(FAVORITE_MARKER))
    } else {
        String::new()
    };
    out.push_str(&format!(
        "{} {}{}\n",
        styles::LIST_INDEX.apply_to(format!("{}.", dr.index)),
        styles::TITLE.apply_to(&r.title),
        favorite
    ));

    out.push_str(&format!(
        "   {} {} ({})   level: {}   priority: {}\n",
        styles::status(r.status).apply_to(status_icon(r.status)),
        styles::status(r.status).apply_to(r.status),
        r.progress,
        styles::level(r.level).apply_to(r.level),
        styles::priority(r.priority).apply_to(r.priority),
    ));

    let category = category_name(categories, r).unwrap_or_else(|| "uncategorized".to_string());
    let visibility = if r.is_public { "public" } else { "private" };
    out.push_str(&format!(
        "   {}\n",
        styles::MUTED.apply_to(format!(
            "category: {} · source: {} · {}",
            category,
            source_label(r),
            visibility
        ))
    ));

    if let Some(description) = &r.description {
        out.push('\n');
        for line in description.lines() {
            out.push_str(&format!("   {}\n", line));
        }
    }

    if !r.links.is_empty() {
        out.push_str(&format!("\n   {}\n", styles::HEADER.apply_to("Links")));
        for link in &r.links {
            if link.title == link.url {
                out.push_str(&format!("   - {}\n", styles::LINK.apply_to(&link.url)));
            } else {
                out.push_str(&format!(
                    "   - {} {}\n",
                    link.title,
                    styles::LINK.apply_to(&link.url)
                ));
            }
        }
    }

    if !r.files.is_empty() {
        out.push_str(&format!("\n   {}\n", styles::HEADER.apply_to("Files")));
        for file in &r.files {
            out.push_str(&format!(
                "   - {} {}\n",
                file.name,
                styles::MUTED.apply_to(format!("({}, {})", format_size(file.size), file.mime_type))
            ));
        }
    }

    out.push_str(&format!(
        "\n   {}\n",
        styles::TIME.apply_to(format!(
            "added {} · updated {}",
            format_time_ago(r.created_at),
            format_time_ago(r.updated_at)
        ))
    ));
    out
}

fn source_label(r: &Resource) -> &'static str {
    match r.source_type() {
        learnshelf::model::SourceType::Link => "link",
        learnshelf::model::SourceType::File => "file",
    }
}

/// Renders the `stats` command.
pub fn render_stats(stats: &ResourceStats) -> String {
    let rows = [
        ("Total", stats.total.to_string()),
        ("Not started", stats.not_started.to_string()),
        ("In progress", stats.in_progress.to_string()),
        ("Completed", stats.completed.to_string()),
        ("Favorites", stats.favorites.to_string()),
        ("Average progress", format!("{}%", stats.rounded_avg_progress())),
        ("Completion rate", format!("{:.0}%", stats.completion_rate())),
    ];

    let label_width = rows.iter().map(|(label, _)| label.width()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| {
            format!(
                "{}  {}\n",
                styles::MUTED.apply_to(format!("{:<width$}", label, width = label_width)),
                styles::TITLE.apply_to(value)
            )
        })
        .collect()
}

pub fn render_categories(result: &CmdResult) -> String {
    let name_width = result
        .categories
        .iter()
        .map(|c| c.name.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for c in &result.categories {
        let padding = " ".repeat(name_width.saturating_sub(c.name.width()));
        out.push_str(&format!(
            "{}{}  {}",
            styles::TITLE.apply_to(&c.name),
            padding,
            styles::MUTED.apply_to(&c.color)
        ));
        if let Some(description) = &c.description {
            out.push_str(&format!("  {}", description));
        }
        out.push('\n');
    }
    out.push_str(&render_messages(&result.messages));
    out
}

pub fn render_config(config: &ShelfConfig, config_path: &Path, data_dir: &Path) -> String {
    let rows = [
        ("config file", config_path.display().to_string()),
        ("data_dir", data_dir.display().to_string()),
        ("user", config.user().to_string()),
        ("default_level", config.default_level.clone()),
        ("default_priority", config.default_priority.clone()),
    ];
    rows.iter()
        .map(|(key, value)| {
            format!(
                "{} = {}\n",
                styles::MUTED.apply_to(format!("{:<16}", key)),
                value
            )
        })
        .collect()
}

/// Renders command messages, one per line, styled by level.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => &*styles::INFO,
                MessageLevel::Success => &*styles::SUCCESS,
                MessageLevel::Warning => &*styles::WARNING,
                MessageLevel::Error => &*styles::ERROR,
            };
            format!("{}\n", style.apply_to(&msg.content))
        })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    match bytes {
        b if b >= MB => format!("{:.1} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{:.1} KB", b as f64 / KB as f64),
        b => format!("{} B", b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use learnshelf::model::{Level, Priority, Progress, ResourceFile, ResourceLink};
    use uuid::Uuid;

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).to_string()
    }

    fn make_resource(title: &str) -> Resource {
        let now = Utc::now();
        Resource {
            id: Uuid::new_v4(),
            user_id: "ada".into(),
            title: title.into(),
            description: None,
            category_id: None,
            level: Level::Beginner,
            priority: Priority::Medium,
            status: Status::NotStarted,
            progress: Progress::default(),
            links: Vec::new(),
            files: Vec::new(),
            is_favorite: false,
            is_public: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn listed(resources: Vec<Resource>) -> Vec<DisplayResource> {
        resources
            .into_iter()
            .enumerate()
            .map(|(i, resource)| DisplayResource {
                index: i + 1,
                resource,
            })
            .collect()
    }

    #[test]
    fn test_list_rows_align() {
        let mut long = make_resource(&"Very long title ".repeat(10));
        long.status = Status::InProgress;
        long.progress = Progress::new(40).unwrap();
        let mut short = make_resource("Short");
        short.is_favorite = true;

        let result = CmdResult::default().with_listed_resources(listed(vec![long, short]));
        let out = plain(&render_list(&result));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("   1. ◐ Very long title"));
        assert!(lines[0].contains('…'));
        assert!(lines[0].contains(" 40%"));
        assert!(lines[1].contains("Short ★"));
        assert_eq!(lines[0].width(), lines[1].width());
    }

    #[test]
    fn test_list_with_stats_header_and_messages() {
        let stats = ResourceStats {
            total: 3,
            in_progress: 1,
            completed: 1,
            avg_progress: 46.6,
            ..Default::default()
        };
        let mut result = CmdResult::default().with_stats(stats);
        result.add_message(CmdMessage::info("No resources match the current filters."));

        let out = plain(&render_list(&result));
        assert!(out.starts_with("3 resources · 1 in progress · 1 completed · avg progress 47%"));
        assert!(out.ends_with("No resources match the current filters.\n"));
    }

    #[test]
    fn test_full_view_shows_details() {
        let category = Category::new("Systems".into(), None, None);
        let mut r = make_resource("OSTEP");
        r.category_id = Some(category.id);
        r.description = Some("Three easy pieces".into());
        r.links.push(ResourceLink {
            title: "Book".into(),
            url: "https://pages.cs.wisc.edu/~remzi/OSTEP/".into(),
        });
        r.files.push(ResourceFile {
            name: "notes.pdf".into(),
            size: 2048,
            mime_type: "application/pdf".into(),
            url: "storage://notes.pdf".into(),
        });

        let result = CmdResult::default()
            .with_listed_resources(listed(vec![r]))
            .with_categories(vec![category]);
        let out = plain(&render_full(&result));

        assert!(out.starts_with("1. OSTEP\n"));
        assert!(out.contains("not-started (0%)"));
        assert!(out.contains("category: Systems · source: file · private"));
        assert!(out.contains("Three easy pieces"));
        assert!(out.contains("- Book https://pages.cs.wisc.edu/~remzi/OSTEP/"));
        assert!(out.contains("- notes.pdf (2.0 KB, application/pdf)"));
    }

    #[test]
    fn test_full_view_uncategorized() {
        let result = CmdResult::default().with_listed_resources(listed(vec![make_resource("Loose")]));
        let out = plain(&render_full(&result));
        assert!(out.contains("category: uncategorized · source: link"));
    }

    #[test]
    fn test_unknown_status_renders_muted_marker() {
        let mut r = make_resource("Imported");
        r.status = Status::Unknown;
        r.level = Level::Unknown;
        let result = CmdResult::default().with_listed_resources(listed(vec![r]));

        let row = plain(&render_list(&result));
        assert!(row.starts_with("   1. ? Imported"));
        assert!(row.contains("unknown"));

        let full = plain(&render_full(&result));
        assert!(full.contains("? unknown (0%)   level: unknown"));
    }

    #[test]
    fn test_render_stats_block() {
        let stats = ResourceStats {
            total: 4,
            not_started: 1,
            in_progress: 2,
            completed: 1,
            favorites: 2,
            avg_progress: 62.5,
        };
        let out = plain(&render_stats(&stats));
        assert!(out.contains("Total             4"));
        assert!(out.contains("Average progress  63%"));
        assert!(out.contains("Completion rate   25%"));
    }

    #[test]
    fn test_render_categories() {
        let mut result = CmdResult::default().with_categories(vec![
            Category::new("Web".into(), Some("Frontend".into()), None),
            Category::new("Algorithms".into(), None, Some("#2563eb".into())),
        ]);
        result.add_message(CmdMessage::success("Category created: Web"));
        let out = plain(&render_categories(&result));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Web         #6b7280  Frontend");
        assert_eq!(lines[1], "Algorithms  #2563eb");
        assert_eq!(lines[2], "Category created: Web");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_to_width("a longer title", 8), "a longe…");
        assert_eq!(truncate_to_width("日本語のタイトル", 7).width(), 7);
    }

    #[test]
    fn test_format_time_ago() {
        let formatted = format_time_ago(Utc::now() - Duration::days(3));
        assert_eq!(formatted, "3 days ago");
        // Timestamps in the future (clock skew) read as "now".
        assert_eq!(format_time_ago(Utc::now() + Duration::hours(1)), "now");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
