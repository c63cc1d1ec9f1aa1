use chrono::{DateTime, Utc};
use colored::Colorize;
use deckid::api::{CmdMessage, GroupSummary, MessageLevel};
use deckid::config::DeckIdConfig;
use deckid::view::ViewEntry;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const NO_LABEL: &str = "(no label)";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_entries(entries: &[ViewEntry]) {
    if entries.is_empty() {
        println!("No records found.");
        return;
    }

    let label_width = label_column_width(entries);
    for entry in entries {
        let idx_str = format!("{:>4}. ", entry.position);
        let label = entry.label.as_deref().unwrap_or(NO_LABEL);
        let padding = " ".repeat(label_width.saturating_sub(label.width()));
        let label_colored = match entry.label {
            Some(_) => label.yellow(),
            None => label.dimmed(),
        };
        let available =
            LINE_WIDTH.saturating_sub(idx_str.width() + label_width + 3 + TIME_WIDTH);
        let front = truncate_to_width(&entry.front, available);
        let front_padding = " ".repeat(available.saturating_sub(front.width()));
        println!(
            "{}{}{} - {}{}{}",
            idx_str,
            label_colored,
            padding,
            front,
            front_padding,
            format_time_ago(entry.created_at).dimmed()
        );
    }
}

pub(super) fn print_groups(groups: &[GroupSummary]) {
    let name_width = groups.iter().map(|g| g.name.width()).max().unwrap_or(0);
    for group in groups {
        let padding = " ".repeat(name_width.saturating_sub(group.name.width()));
        println!(
            "  {}{}  {}",
            group.name.bold(),
            padding,
            format!("{} records, {} labeled", group.records, group.labeled).dimmed()
        );
    }
}

pub(super) fn print_config(config: &DeckIdConfig) {
    for key in DeckIdConfig::KEYS {
        println!("{} = {}", key, config.get(key).unwrap_or_default());
    }
}

fn label_column_width(entries: &[ViewEntry]) -> usize {
    entries
        .iter()
        .map(|e| e.label.as_deref().unwrap_or(NO_LABEL).width())
        .max()
        .unwrap_or(0)
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let c = if c == '\n' { ' ' } else { c };
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
