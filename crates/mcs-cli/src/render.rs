//! Table rendering for the presentation models.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mcs_ingest::format_in_out_date;
use mcs_model::{ConfigurationDocument, DateSignal};
use mcs_view::{LogsView, MusicView, OverrideView, ScheduleListing};

pub fn print_channels(document: &ConfigurationDocument) {
    println!("Service URL: {}", document.service_url);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Idx"),
        header_cell("Channel"),
        header_cell("Full Name"),
        header_cell("Id"),
        header_cell("Tracking"),
        header_cell("Mgmt"),
        header_cell("Music"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    for channel in &document.channels {
        let id = channel
            .entity_id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        let music = channel.music.as_ref().map_or_else(
            || "-".to_string(),
            |m| format!("{} / {} / {}", m.day, m.zone, m.property),
        );
        table.add_row(vec![
            Cell::new(channel.index),
            Cell::new(&channel.short_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&channel.name),
            Cell::new(id),
            Cell::new(channel.tracking_period.as_deref().unwrap_or("-")),
            enabled_cell(channel.management_enabled),
            Cell::new(music),
        ]);
    }
    println!("{table}");
}

pub fn print_music(channel_index: u32, view: &MusicView) {
    match view {
        MusicView::Unavailable(state) => {
            println!("Channel {channel_index}: {state}");
        }
        MusicView::Loaded(music) => {
            println!(
                "Channel {channel_index}: {} schedules ({} overlay, {} normal) from {}",
                music.total(),
                music.overlays.len(),
                music.profiles.len(),
                music.snapshot
            );
            if !music.overlays.is_empty() {
                println!();
                println!("Overriding profiles:");
                print_schedule_table(&music.overlays);
                print_frequency_ranges(&music.overlays);
            }
            if !music.profiles.is_empty() {
                println!();
                println!("Normal profiles:");
                print_schedule_table(&music.profiles);
            }
        }
    }
}

fn print_schedule_table(listings: &[ScheduleListing]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Group"),
        header_cell("Name"),
        header_cell("Window"),
        header_cell("Day"),
        header_cell("Active From"),
        header_cell("Active Until"),
        header_cell("Hidden"),
        header_cell("Size"),
        header_cell("Modified"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 7, CellAlignment::Center);
    align_column(&mut table, 8, CellAlignment::Right);
    for listing in listings {
        let record = &listing.record;
        let window = if record.start_time.is_empty() && record.end_time.is_empty() {
            "-".to_string()
        } else {
            format!("{} - {}", record.start_time, record.end_time)
        };
        let name_cell = if listing.outcome.is_parsed() {
            Cell::new(&record.name)
        } else {
            dim_cell("(no schedule data)")
        };
        table.add_row(vec![
            Cell::new(&listing.entry.name),
            dim_cell(&listing.entry.group),
            name_cell,
            Cell::new(window),
            Cell::new(&record.day_of_week),
            date_cell(&record.active_from),
            date_cell(&record.active_until),
            hidden_cell(record.hidden),
            Cell::new(&listing.entry.size),
            dim_cell(&listing.entry.modified),
        ]);
    }
    println!("{table}");
}

fn print_frequency_ranges(listings: &[ScheduleListing]) {
    for listing in listings {
        for range in &listing.record.frequency_ranges {
            let (from, _) = format_in_out_date(&range.active_from);
            let (until, _) = format_in_out_date(&range.active_until);
            println!(
                "  {}: {}, {} - {}, active {} to {}",
                listing.entry.name,
                range.frequency_display(),
                range.start_time,
                range.end_time,
                from,
                until
            );
        }
    }
}

pub fn print_override(channel_index: u32, view: &OverrideView) {
    match view {
        OverrideView::Found { path, text } => {
            println!("Override schedule for channel {channel_index}: {}", path.display());
            println!();
            print!("{text}");
        }
        OverrideView::Missing { path } => {
            println!(
                "No override schedule file for channel {channel_index}: {}",
                path.display()
            );
        }
    }
}

pub fn print_logs(channel_index: u32, view: &LogsView) {
    if view.days.is_empty() {
        println!("No logs found for channel {channel_index}.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Engine Log"),
        header_cell("Playback Debug Log"),
    ]);
    apply_table_style(&mut table);
    for day in &view.days {
        table.add_row(vec![
            Cell::new(&day.date),
            log_cell(day.engine.as_deref()),
            log_cell(day.playback.as_deref()),
        ]);
    }
    println!("{table}");
}

fn log_cell(path: Option<&std::path::Path>) -> Cell {
    match path {
        Some(path) => Cell::new(
            path.file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("?"),
        ),
        None => dim_cell("no log for this kind"),
    }
}

fn date_cell(raw: &str) -> Cell {
    if raw.is_empty() {
        return dim_cell("-");
    }
    let (text, signal) = format_in_out_date(raw);
    Cell::new(text).fg(signal_color(signal))
}

fn signal_color(signal: DateSignal) -> Color {
    match signal {
        DateSignal::Past => Color::Red,
        DateSignal::Future => Color::Green,
        DateSignal::Neutral => Color::DarkGrey,
    }
}

fn enabled_cell(enabled: bool) -> Cell {
    if enabled {
        Cell::new("on").fg(Color::Green)
    } else {
        dim_cell("off")
    }
}

fn hidden_cell(hidden: bool) -> Cell {
    if hidden {
        Cell::new("yes").fg(Color::Yellow)
    } else {
        dim_cell("no")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
