//! Terminal rendering of reports and reference tables.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ddx_core::{Advisory, DiagnosticReport, NO_GUIDELINE_MATCH};
use ddx_model::{GuidelineMatch, LabFinding, Symptom};
use ddx_standards::{GUIDELINE_ORGANIZATIONS, profiles};

const GUIDELINE_HEADING: &str = "ПРОВЕРКА ПО КЛИНИЧЕСКИМ РЕКОМЕНДАЦИЯМ:";
const ADVISORY_HEADING: &str = "ЭКСПЕРИМЕНТАЛЬНАЯ ИИ-ОЦЕНКА (не является диагнозом):";

/// Plain-text report: conclusion, guideline check and optional advisory.
pub fn render_text(report: &DiagnosticReport, guideline_limit: usize) -> String {
    let mut text = report.conclusion_text();
    text.push_str("\n\n");
    text.push_str(GUIDELINE_HEADING);
    text.push('\n');
    let matches = report.guideline_matches();
    if matches.is_empty() {
        text.push_str(NO_GUIDELINE_MATCH);
        text.push('\n');
    }
    for (position, matched) in matches.iter().take(guideline_limit).enumerate() {
        let profile = matched.profile;
        text.push_str(&format!("{}. {}\n", position + 1, profile.title()));
        text.push_str(&format!(
            "   Соответствие критериям: {}/{}\n",
            matched.matched_count(),
            matched.total_criteria
        ));
        text.push_str(&format!("   Рекомендации: {}\n", profile.source));
        text.push_str(&format!(
            "   Рекомендуемая терапия: {}\n",
            profile.recommended_treatment
        ));
        text.push_str("   Критерии диагноза:\n");
        for criterion in &matched.matched_criteria {
            text.push_str(&format!("   ✓ {criterion}\n"));
        }
    }
    if let Some(advisory) = report.advisory() {
        text.push('\n');
        text.push_str(ADVISORY_HEADING);
        text.push('\n');
        text.push_str(&advisory_line(advisory));
        text.push('\n');
    }
    text
}

/// Table output for `diagnose`.
pub fn render_tables(report: &DiagnosticReport, guideline_limit: usize) -> String {
    let top = report.top();
    let mut out = format!(
        "Вероятный диагноз: {} ({} баллов)\n{}\n\n{GUIDELINE_HEADING}\n",
        top.condition,
        top.score,
        ranking_table(report)
    );
    let matches = report.guideline_matches();
    if matches.is_empty() {
        out.push_str(NO_GUIDELINE_MATCH);
        out.push('\n');
    }
    for (position, matched) in matches.iter().take(guideline_limit).enumerate() {
        out.push_str(&format!(
            "{}. {}\n{}\n",
            position + 1,
            matched.profile.title(),
            guideline_table(matched)
        ));
    }

    if let Some(advisory) = report.advisory() {
        out.push_str(&format!(
            "\n{ADVISORY_HEADING}\n{}\n",
            advisory_line(advisory)
        ));
    }
    out
}

pub fn ranking_table(report: &DiagnosticReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Диагноз"),
        header_cell("Баллы"),
        header_cell("Роль"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    let differential_len = report.differential().len();
    for (position, entry) in report.scores().ranked().iter().enumerate() {
        let role = match position {
            0 => Cell::new("вероятный")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
            n if n <= differential_len => Cell::new("дифференциальный"),
            _ => dim_cell("-"),
        };
        let name = if position == 0 {
            Cell::new(entry.condition.display_name()).add_attribute(Attribute::Bold)
        } else {
            Cell::new(entry.condition.display_name())
        };
        table.add_row(vec![
            Cell::new(position + 1),
            name,
            score_cell(entry.score),
            role,
        ]);
    }
    table
}

pub fn guideline_table(matched: &GuidelineMatch) -> Table {
    let profile = matched.profile;
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![
        header_cell("Соответствие критериям"),
        Cell::new(format!(
            "{}/{}",
            matched.matched_count(),
            matched.total_criteria
        )),
    ]);
    table.add_row(vec![header_cell("Рекомендации"), Cell::new(profile.source)]);
    table.add_row(vec![
        header_cell("Рекомендуемая терапия"),
        Cell::new(profile.recommended_treatment),
    ]);
    let criteria = matched
        .matched_criteria
        .iter()
        .map(|criterion| format!("✓ {criterion}"))
        .collect::<Vec<_>>()
        .join("\n");
    table.add_row(vec![
        header_cell("Критерии диагноза"),
        Cell::new(criteria).fg(Color::Green),
    ]);
    table
}

/// Symptom and lab finding vocabularies with their command-line keys.
pub fn vocabulary_tables() -> (Table, Table) {
    let mut symptoms = Table::new();
    symptoms.set_header(vec![header_cell("Symptom key"), header_cell("Label")]);
    apply_table_style(&mut symptoms);
    for symptom in Symptom::ALL {
        symptoms.add_row(vec![key_cell(symptom.key()), Cell::new(symptom.label())]);
    }

    let mut labs = Table::new();
    labs.set_header(vec![header_cell("Lab key"), header_cell("Label")]);
    apply_table_style(&mut labs);
    for finding in LabFinding::ALL {
        labs.add_row(vec![key_cell(finding.key()), Cell::new(finding.label())]);
    }
    (symptoms, labs)
}

pub fn guidelines_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Profile"),
        header_cell("Criteria"),
        header_cell("Required"),
        header_cell("Therapy"),
        header_cell("Source"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for profile in profiles() {
        table.add_row(vec![
            key_cell(profile.key),
            Cell::new(profile.criteria.join("\n")),
            Cell::new(format!(
                "{}/{}",
                profile.required_criteria,
                profile.total_criteria()
            )),
            Cell::new(profile.recommended_treatment),
            dim_cell(profile.source),
        ]);
    }
    table
}

pub fn print_sources() {
    println!("Основано на рекомендациях:");
    for organization in GUIDELINE_ORGANIZATIONS {
        println!("- {organization}");
    }
}

fn advisory_line(advisory: &Advisory) -> String {
    match &advisory.classification {
        Some(classification) => format!(
            "{} ({}, {:.0}%)",
            advisory.phrase,
            classification.label,
            classification.score * 100.0
        ),
        None => advisory.phrase.clone(),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn score_cell(score: i32) -> Cell {
    match score {
        s if s > 0 => Cell::new(s).fg(Color::Cyan),
        0 => dim_cell(0),
        s => Cell::new(s).fg(Color::Red),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn key_cell(key: &str) -> Cell {
    Cell::new(key).fg(Color::Blue).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
