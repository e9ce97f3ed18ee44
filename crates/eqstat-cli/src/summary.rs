//! Console summary of an analysis report.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use eqstat_model::{AnalysisReport, NarrativeSource, TrendDirection};

pub fn print_summary(report: &AnalysisReport) {
    println!("Equipment units analyzed: {}", report.total_count);
    println!("Average health score: {:.1}%", report.health_score_avg);
    println!("Statistical outliers: {}", report.outliers_count);
    println!();

    print_health_table(report);
    print_statistics_table(report);
    print_outlier_table(report);
    print_correlation_table(report);
    print_trend_table(report);
    print_category_table(report);
    print_narrative(report);
}

fn print_health_table(report: &AnalysisReport) {
    let distribution = report.health_score_distribution;
    let total = report.total_count.max(1) as f64;
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Health Band"),
        header_cell("Count"),
        header_cell("Share"),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    let bands = [
        ("Excellent (90-100%)", distribution.excellent, Color::Green),
        ("Good (70-89%)", distribution.good, Color::Cyan),
        ("Fair (50-69%)", distribution.fair, Color::Yellow),
        ("Poor (<50%)", distribution.poor, Color::Red),
    ];
    for (label, count, color) in bands {
        table.add_row(vec![
            Cell::new(label).fg(color),
            count_cell(count, color),
            Cell::new(format!("{:.1}%", count as f64 / total * 100.0)),
        ]);
    }
    println!("Health distribution:");
    println!("{table}");
    println!();
}

fn print_statistics_table(report: &AnalysisReport) {
    if report.statistics.is_empty() {
        return;
    }
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell("Mean"),
        header_cell("Median"),
        header_cell("Std"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Q25"),
        header_cell("Q75"),
    ]);
    for index in 1..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (name, stats) in &report.statistics {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", stats.mean)),
            Cell::new(format!("{:.2}", stats.median)),
            Cell::new(format!("{:.2}", stats.std)),
            Cell::new(format!("{:.2}", stats.min)),
            Cell::new(format!("{:.2}", stats.max)),
            Cell::new(format!("{:.2}", stats.q25)),
            Cell::new(format!("{:.2}", stats.q75)),
        ]);
    }
    println!("Parameter statistics:");
    println!("{table}");
    println!();
}

fn print_outlier_table(report: &AnalysisReport) {
    if report.outlier_details.is_empty() {
        return;
    }
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell("Outliers"),
        header_cell("Share"),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for detail in &report.outlier_details {
        table.add_row(vec![
            Cell::new(&detail.parameter),
            count_cell(detail.count, Color::Red),
            Cell::new(format!("{:.2}%", detail.percentage)),
        ]);
    }
    println!("Outliers (|z| > 3):");
    println!("{table}");
    println!();
}

fn print_correlation_table(report: &AnalysisReport) {
    if report.correlation.is_empty() {
        return;
    }
    let mut table = new_table();
    table.set_header(vec![header_cell("Parameters"), header_cell("Pearson r")]);
    align_column(&mut table, 1, CellAlignment::Right);
    for (pair, value) in &report.correlation {
        let cell = Cell::new(format!("{value:.2}"));
        let cell = if value.abs() > 0.7 {
            cell.fg(Color::Magenta).add_attribute(Attribute::Bold)
        } else {
            cell
        };
        table.add_row(vec![Cell::new(pair), cell]);
    }
    println!("Correlations:");
    println!("{table}");
    println!();
}

fn print_trend_table(report: &AnalysisReport) {
    if report.trends.is_empty() {
        return;
    }
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell("Direction"),
        header_cell("Slope"),
        header_cell("Change/Row"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (name, trend) in &report.trends {
        let direction = match trend.direction {
            TrendDirection::Increasing => Cell::new("increasing").fg(Color::Green),
            TrendDirection::Decreasing => Cell::new("decreasing").fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(name),
            direction,
            Cell::new(format!("{:.4}", trend.slope)),
            Cell::new(format!("{:.2}%", trend.change_rate)),
        ]);
    }
    println!("Trends (chronological):");
    println!("{table}");
    println!();
}

fn print_category_table(report: &AnalysisReport) {
    if report.type_statistics.is_empty() {
        return;
    }
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Equipment Type"),
        header_cell("Count"),
        header_cell("Avg Health"),
        header_cell("Avg Pressure"),
        header_cell("Avg Temp"),
    ]);
    for index in 1..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (category, stats) in &report.type_statistics {
        table.add_row(vec![
            Cell::new(category).add_attribute(Attribute::Bold),
            Cell::new(stats.count),
            Cell::new(format!("{:.1}%", stats.avg_health)),
            Cell::new(format!("{:.2}", stats.avg_pressure)),
            Cell::new(format!("{:.2}", stats.avg_temp)),
        ]);
    }
    println!("Equipment categories:");
    println!("{table}");
    println!();
}

fn print_narrative(report: &AnalysisReport) {
    let source = match report.narrative_source {
        NarrativeSource::Generated => "generated",
        NarrativeSource::Fallback => "statistical fallback",
    };
    println!("Narrative summary ({source}):");
    println!("{}", report.narrative);
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
