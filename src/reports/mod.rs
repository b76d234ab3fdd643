use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use passforge::api::{GenerateReport, PhraseScore};
use passforge::geometry::KeyboardLayout;
use passforge::scorer::DistanceTable;

pub fn print_layout_grid(layout: &KeyboardLayout) {
    println!("\nLayout: {}", layout.name());
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); layout.row_count()];
    for key in layout.keys() {
        rows[key.row].push(Cell::new(key.key).set_alignment(CellAlignment::Center));
    }
    for row in rows {
        table.add_row(row);
    }
    println!("{}", table);
}

pub fn print_distance_matrix(table: &DistanceTable, keys: &[char]) {
    let max = table.max_distance();
    let mut grid = Table::new();
    grid.load_preset(ASCII_FULL);

    let mut header = vec![Cell::new("")];
    header.extend(
        keys.iter()
            .map(|k| Cell::new(k).add_attribute(Attribute::Bold)),
    );
    grid.set_header(header);

    for &from in keys {
        let mut row = vec![Cell::new(from).add_attribute(Attribute::Bold)];
        for &to in keys {
            let d = table.distance(from, to).unwrap_or(0);
            let mut cell = Cell::new(d).set_alignment(CellAlignment::Right);
            if d == 0 {
                cell = cell.fg(Color::DarkGrey);
            } else if d == max {
                cell = cell.fg(Color::Red);
            }
            row.push(cell);
        }
        grid.add_row(row);
    }
    println!("{}", grid);
}

pub fn print_generate_report(report: &GenerateReport) {
    println!("\n=== 🏆 RESULT ===");
    let Some(solution) = &report.solution else {
        println!(
            "No password of {} words fits {}..={} characters ({} words in dictionary).",
            report.search.word_count,
            report.search.min_len,
            report.search.max_len,
            report.dictionary_size
        );
        println!("Time: {:.2} ms", report.elapsed_ms);
        return;
    };

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Password"),
        Cell::new(&solution.password).fg(Color::Green),
    ]);
    table.add_row(vec![Cell::new("Moves"), Cell::new(solution.cost)]);
    table.add_row(vec![Cell::new("Length"), Cell::new(solution.length)]);
    table.add_row(vec![
        Cell::new("Words"),
        Cell::new(solution.words.join(" + ")),
    ]);
    table.add_row(vec![Cell::new("Layout"), Cell::new(&report.layout_name)]);
    table.add_row(vec![
        Cell::new("Reuse"),
        Cell::new(report.search.reuse.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Dictionary"),
        Cell::new(report.dictionary_size),
    ]);
    table.add_row(vec![
        Cell::new("Time"),
        Cell::new(format!("{:.2} ms", report.elapsed_ms)),
    ]);
    println!("{}", table);
}

pub fn print_phrase_score(score: &PhraseScore) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Reach").add_attribute(Attribute::Bold),
        Cell::new("Inside").add_attribute(Attribute::Bold),
    ]);

    for (word, reach, inner) in &score.words {
        table.add_row(vec![
            Cell::new(word),
            Cell::new(reach).set_alignment(CellAlignment::Right),
            Cell::new(inner).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(score.total)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);

    println!("\nPhrase: {} (from '{}')", score.phrase, score.initial_char);
    println!("{}", table);
    println!("Moves: {}", score.total);
}
