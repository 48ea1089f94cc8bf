use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use assess_core::PiiGuard;
use assess_model::{AnalysisResult, PiiVerdict, QuestionSummary};

pub fn print_questions(summaries: &[QuestionSummary], warnings: &[String]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Question"),
        header_cell("Correct"),
        header_cell("Students"),
        header_cell("Percent"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (idx, summary) in summaries.iter().enumerate() {
        table.add_row(vec![
            dim_cell(idx + 1),
            Cell::new(&summary.question),
            Cell::new(summary.correct),
            Cell::new(summary.total),
            Cell::new(summary.percent()),
        ]);
    }
    println!("{table}");
    print_warnings(warnings);
}

pub fn print_results(results: &[AnalysisResult], students: usize, warnings: &[String]) {
    println!("Students: {students}");
    if results.is_empty() {
        println!("No results: the export has no student rows.");
        print_warnings(warnings);
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Learning target"),
        header_cell("Students in range"),
        header_cell("Total"),
        header_cell("Percent"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for result in results {
        table.add_row(vec![
            Cell::new(&result.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            count_cell(result.count),
            Cell::new(result.total),
            Cell::new(&result.percent),
        ]);
    }
    println!("{table}");
    print_warnings(warnings);
}

pub fn print_pii_verdict(verdict: &PiiVerdict) {
    if verdict.is_valid {
        println!("No personal data columns detected.");
        return;
    }
    let guard = PiiGuard::new();
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Looks like")]);
    apply_table_style(&mut table);
    for column in &verdict.offending_columns {
        let reason = guard.flag_reason(column).unwrap_or("-");
        table.add_row(vec![
            Cell::new(column).fg(Color::Red).add_attribute(Attribute::Bold),
            Cell::new(reason.replace('_', " ")),
        ]);
    }
    eprintln!("Upload rejected: remove these columns from the export and try again.");
    eprintln!("{table}");
}

fn print_warnings(warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }
    eprintln!("Warnings:");
    for warning in warnings {
        eprintln!("- {warning}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
