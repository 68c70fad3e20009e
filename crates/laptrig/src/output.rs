use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use laptrig_codec::Event;
use serde::Serialize;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// One rendered lap-table row.
#[derive(Serialize)]
pub struct LapRow {
    pub group: u32,
    pub duration_ms: u32,
    pub name: String,
}

pub fn print_event(event: &Event, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(event),
        OutputFormat::Table => {
            let mut table = new_table(vec!["EVENT", "GROUP", "DURATION (MS)", "NAME"]);
            table.add_row(event_row(event));
            println!("{table}");
        }
        OutputFormat::Pretty => match event {
            Event::Started => println!("run started"),
            Event::Finished {
                duration,
                active_group,
            } => println!("run finished: group {active_group}, {duration} ms"),
            Event::Table {
                group,
                duration,
                name,
            } => println!("group {group} ({name}): {duration} ms"),
        },
    }
}

pub fn print_lap_table(rows: &[LapRow], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Table => {
            let mut table = new_table(vec!["GROUP", "DURATION (MS)", "NAME"]);
            for row in rows {
                table.add_row(vec![
                    row.group.to_string(),
                    row.duration_ms.to_string(),
                    row.name.clone(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for row in rows {
                println!("group {} ({}): {} ms", row.group, row.name, row.duration_ms);
            }
        }
    }
}

pub fn print_groups(count: u32, format: OutputFormat) {
    #[derive(Serialize)]
    struct Output {
        groups: u32,
    }

    match format {
        OutputFormat::Json => print_json(&Output { groups: count }),
        OutputFormat::Table => {
            let mut table = new_table(vec!["GROUPS"]);
            table.add_row(vec![count.to_string()]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!("groups: {count}"),
    }
}

pub fn print_release(group: u32, data: &[u8], format: OutputFormat) {
    #[derive(Serialize)]
    struct Output<'a> {
        group: u32,
        data: &'a [u8],
    }

    match format {
        OutputFormat::Json => print_json(&Output { group, data }),
        OutputFormat::Table => {
            let mut table = new_table(vec!["GROUP", "DATA"]);
            table.add_row(vec![group.to_string(), hex_preview(data)]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!("released group {group}: [{}]", hex_preview(data)),
    }
}

pub fn print_name(group: u32, name: &str, format: OutputFormat) {
    #[derive(Serialize)]
    struct Output<'a> {
        group: u32,
        name: &'a str,
    }

    match format {
        OutputFormat::Json => print_json(&Output { group, name }),
        OutputFormat::Table => {
            let mut table = new_table(vec!["GROUP", "NAME"]);
            table.add_row(vec![group.to_string(), name.to_string()]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!("group {group}: {name}"),
    }
}

/// Confirmation for operations whose reply carries at most a group index.
pub fn print_done(action: &str, group: Option<u32>, format: OutputFormat) {
    #[derive(Serialize)]
    struct Output<'a> {
        action: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        group: Option<u32>,
    }

    match format {
        OutputFormat::Json => print_json(&Output { action, group }),
        OutputFormat::Table => {
            let mut table = new_table(vec!["ACTION", "GROUP"]);
            let group = group.map(|g| g.to_string()).unwrap_or_default();
            table.add_row(vec![action.to_string(), group]);
            println!("{table}");
        }
        OutputFormat::Pretty => match group {
            Some(group) => println!("{action}: group {group}"),
            None => println!("{action}"),
        },
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn event_row(event: &Event) -> Vec<String> {
    match event {
        Event::Started => vec![
            "STARTED".to_string(),
            String::new(),
            String::new(),
            String::new(),
        ],
        Event::Finished {
            duration,
            active_group,
        } => vec![
            "FINISHED".to_string(),
            active_group.to_string(),
            duration.to_string(),
            String::new(),
        ],
        Event::Table {
            group,
            duration,
            name,
        } => vec![
            "TABLE".to_string(),
            group.to_string(),
            duration.to_string(),
            name.clone(),
        ],
    }
}

fn hex_preview(data: &[u8]) -> String {
    data.iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
