use serde::Serialize;
use tomatimer_core::{format_clock, Mode};

#[derive(Serialize)]
struct ModeRow {
    id: &'static str,
    label: &'static str,
    duration_secs: u32,
    call_to_action: &'static str,
}

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<ModeRow> = Mode::ALL
        .iter()
        .map(|mode| ModeRow {
            id: mode.id(),
            label: mode.label(),
            duration_secs: mode.duration_secs(),
            call_to_action: mode.call_to_action(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in rows {
        println!(
            "{:<12} {:<12} {:>6}  {}",
            row.id,
            row.label,
            format_clock(row.duration_secs),
            row.call_to_action
        );
    }
    Ok(())
}
