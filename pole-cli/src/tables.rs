use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{host::StepRecord, status::Status},
    fmt::FormattedPercentage,
};

pub fn build_steps_table(records: &[StepRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec![
        "Date", "Time", "Wind", "Dir", "Pressure", "Moment", "Resisting", "Stress", "Status", "Next",
    ]);
    for record in records {
        let report = &record.report;
        table.add_row(vec![
            Cell::new(record.at.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(record.at.format("%H:%M")),
            Cell::new(report.wind_speed).set_alignment(CellAlignment::Right),
            Cell::new(report.wind_direction)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(report.wind_pressure).set_alignment(CellAlignment::Right),
            Cell::new(report.total_moment).set_alignment(CellAlignment::Right),
            Cell::new(report.resisting_moment)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(FormattedPercentage(report.pole_stress)).set_alignment(CellAlignment::Right).fg(
                if report.pole_stress < 0.5 {
                    Color::Green
                } else if report.pole_stress < 1.0 {
                    Color::DarkYellow
                } else {
                    Color::Red
                },
            ),
            Cell::new(report.status).fg(match report.status {
                Status::Ok => Color::Green,
                Status::Failed => Color::Red,
            }),
            Cell::new(record.next_event).add_attribute(Attribute::Dim),
        ]);
    }
    table
}
