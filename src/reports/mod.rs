use apex::audit::AuditEntry;
use apex::config::{Calibration, CategoryRule};
use apex::events::{Category, EventId};
use apex::results::RecordRow;
use apex::scorer::{ScoreCard, Tier};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Apex => Color::Yellow,
        Tier::Pro => Color::Green,
        Tier::AthleticPlus => Color::Magenta,
        Tier::Athletic => Color::Blue,
        Tier::Developing => Color::White,
    }
}

pub fn category_color(category: Category) -> Color {
    match category {
        Category::Speed => Color::Green,
        Category::Power => Color::Yellow,
        Category::Strength => Color::Magenta,
        Category::Endurance => Color::Blue,
    }
}

pub fn print_score_card(card: &ScoreCard, calibration: &Calibration) {
    println!("\n=== APEX SCORE ({}) ===", card.calibration);

    if card.complete {
        println!("Form: complete");
    } else {
        println!("Form: INCOMPLETE (partial scores below)");
        for (event, issue) in &card.incomplete_fields {
            println!("  - {}: {}", event, issue);
        }
    }

    let mut events = new_table();
    events.add_row(vec![
        Cell::new("Event").add_attribute(Attribute::Bold),
        Cell::new("Category"),
        Cell::new("Points"),
        Cell::new("Max"),
    ]);
    align_right(&mut events, 2..=3);
    for spec in &calibration.events {
        let category = calibration.category_of(spec.event);
        let mut name = Cell::new(spec.event.to_string());
        if let Some(c) = category {
            name = name.fg(category_color(c));
        }
        events.add_row(vec![
            name,
            Cell::new(category.map_or("-".to_string(), |c| c.to_string())),
            Cell::new(card.result.event(spec.event)),
            Cell::new(spec.point_ceiling),
        ]);
    }
    println!("{}", events);

    let mut categories = new_table();
    categories.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Score"),
        Cell::new("Max"),
    ]);
    align_right(&mut categories, 1..=2);
    for cat in &calibration.categories {
        categories.add_row(vec![
            Cell::new(cat.category.to_string()).fg(category_color(cat.category)),
            Cell::new(card.result.category(cat.category)).add_attribute(Attribute::Bold),
            Cell::new(cat.point_ceiling),
        ]);
    }
    categories.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(card.result.total_score)
            .fg(tier_color(card.tier))
            .add_attribute(Attribute::Bold),
        Cell::new(apex::consts::TOTAL_CEILING),
    ]);
    println!("{}", categories);

    println!("Tier: {}", card.tier);

    for placement in &card.quadrants {
        println!(
            "{}: {} ({} {} / {} {})",
            placement.title,
            placement.label,
            placement.x_axis,
            placement.x_score,
            placement.y_axis,
            placement.y_score
        );
    }
}

pub fn print_audit_report(entries: &[AuditEntry], tolerance: u32) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Athlete").add_attribute(Attribute::Bold),
        Cell::new("Event"),
        Cell::new("Stored"),
        Cell::new("Derived").fg(Color::Cyan),
        Cell::new("Delta"),
        Cell::new("Tier"),
        Cell::new("Form"),
    ]);
    align_right(&mut table, 3..=5);

    for e in entries {
        let ok = e.matches(tolerance);
        let delta_cell = Cell::new(format!("{:+}", e.total_delta));
        table.add_row(vec![
            Cell::new(e.athlete_rank),
            Cell::new(&e.athlete_name).add_attribute(Attribute::Bold),
            Cell::new(&e.event_name),
            Cell::new(e.stored_total),
            Cell::new(e.card.result.total_score).fg(Color::Cyan),
            if ok {
                delta_cell.fg(Color::Green)
            } else {
                delta_cell.fg(Color::Red)
            },
            Cell::new(e.card.tier.to_string()).fg(tier_color(e.card.tier)),
            Cell::new(if e.card.complete { "ok" } else { "incomplete" }),
        ]);
    }
    println!("\n{}", table);

    let mismatches = entries.iter().filter(|e| !e.matches(tolerance)).count();
    println!(
        "Audited {} rows: {} mismatches (tolerance {})",
        entries.len(),
        mismatches,
        tolerance
    );
}

pub fn print_records_report(records: &[(RecordRow, Option<EventId>, Option<u32>)]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Event").add_attribute(Attribute::Bold),
        Cell::new("Gender"),
        Cell::new("Holder"),
        Cell::new("Record"),
        Cell::new("Points").fg(Color::Cyan),
    ]);
    align_right(&mut table, 4..=4);

    for (row, event, points) in records {
        let event_cell = match event {
            Some(e) => Cell::new(e.to_string()),
            None => Cell::new(&row.event_name).fg(Color::Red),
        };
        table.add_row(vec![
            event_cell,
            Cell::new(&row.gender),
            Cell::new(&row.record_holder),
            Cell::new(&row.record_value),
            Cell::new(points.map_or("-".to_string(), |p| p.to_string())).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_calibration(calibration: &Calibration) {
    println!("\n=== CALIBRATION: {} ===", calibration.name);
    if !calibration.notes.is_empty() {
        println!("{}", calibration.notes);
    }

    let mut events = new_table();
    events.add_row(vec![
        Cell::new("Event").add_attribute(Attribute::Bold),
        Cell::new("Unit"),
        Cell::new("Direction"),
        Cell::new("Worst"),
        Cell::new("Best"),
        Cell::new("Max"),
    ]);
    align_right(&mut events, 3..=5);
    for spec in &calibration.events {
        events.add_row(vec![
            Cell::new(spec.event.to_string()),
            Cell::new(spec.unit.to_string()),
            Cell::new(spec.direction.to_string()),
            Cell::new(spec.worst_raw),
            Cell::new(spec.best_raw),
            Cell::new(spec.point_ceiling),
        ]);
    }
    println!("{}", events);

    let mut categories = new_table();
    categories.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Rule"),
        Cell::new("Events"),
        Cell::new("Max"),
    ]);
    align_right(&mut categories, 3..=3);
    for cat in &calibration.categories {
        let rule = match cat.rule {
            CategoryRule::Sum => "sum",
            CategoryRule::AverageThenScale => "average",
        };
        let names: Vec<String> = cat.events.iter().map(|e| e.to_string()).collect();
        categories.add_row(vec![
            Cell::new(cat.category.to_string()).fg(category_color(cat.category)),
            Cell::new(rule),
            Cell::new(names.join(", ")),
            Cell::new(cat.point_ceiling),
        ]);
    }
    println!("{}", categories);

    let bands: Vec<String> = Tier::iter()
        .map(|tier| format!("{} {}+", tier, tier.lower_bound(&calibration.tiers)))
        .collect();
    println!("Tiers: {}", bands.join(" | "));
}
