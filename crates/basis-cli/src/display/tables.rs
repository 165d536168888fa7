use std::io::{self, Write};

use crystal_basis::core::models::output::OrbitalSpan;
use crystal_basis::engine::query::{AtomOrbitals, AtomRow, BasisSetSummary, Query, Report};

const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

struct Column {
    title: &'static str,
    width: usize,
    align: Align,
}

impl Column {
    const fn new(title: &'static str, width: usize, align: Align) -> Self {
        Self {
            title,
            width,
            align,
        }
    }
}

const ATOM_COLUMNS: [Column; 6] = [
    Column::new("Label", 6, Align::Left),
    Column::new("Element", 12, Align::Center),
    Column::new("X (a.u.)", 12, Align::Right),
    Column::new("Y (a.u.)", 12, Align::Right),
    Column::new("Z (a.u.)", 12, Align::Right),
    Column::new("Atomic orbitals", 16, Align::Right),
];

const PRIMITIVE_COLUMNS: [Column; 5] = [
    Column::new("Atomic function", 16, Align::Center),
    Column::new("Exponent", 14, Align::Right),
    Column::new("s coeff.", 14, Align::Right),
    Column::new("p coeff.", 14, Align::Right),
    Column::new("d/f/g coeff.", 14, Align::Right),
];

const ORBITAL_COLUMNS: [Column; 3] = [
    Column::new("Atomic function", 16, Align::Center),
    Column::new("Index", 10, Align::Center),
    Column::new("Atomic orbital", 16, Align::Left),
];

/// Heading printed above the tables of one query.
pub fn query_heading(query: &Query) -> String {
    match query {
        Query::AllAtoms => "Atoms from basis set region of output file:".to_string(),
        Query::AllBasisSets => "Basis sets in the output file:".to_string(),
        Query::AllGhosts => "Ghost atoms in the output file:".to_string(),
        Query::SingleAtom(label) => format!("Enumeration for Atom {label}:"),
        Query::AtomRange { from, to } => format!("Enumeration for Atoms {from}-{to}:"),
    }
}

pub fn print_report(
    out: &mut impl Write,
    query: &Query,
    report: &Report<'_>,
    coordinate_precision: usize,
    coefficient_precision: usize,
) -> io::Result<()> {
    writeln!(out, "{}", query_heading(query))?;
    if report.is_empty() {
        writeln!(out, "{INDENT}(nothing to report)")?;
        return writeln!(out);
    }

    match report {
        Report::Atoms(rows) => print_atom_table(out, rows, coordinate_precision)?,
        Report::BasisSets(summaries) => {
            for summary in summaries {
                print_basis_set_table(out, summary, coefficient_precision)?;
            }
        }
        Report::Orbitals(atoms) => {
            for atom in atoms {
                print_orbital_table(out, atom)?;
            }
        }
    }
    writeln!(out)
}

fn print_atom_table(out: &mut impl Write, rows: &[AtomRow], precision: usize) -> io::Result<()> {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.label.to_string(),
                row.symbol.clone(),
                format!("{:.*}", precision, row.position.x),
                format!("{:.*}", precision, row.position.y),
                format!("{:.*}", precision, row.position.z),
                span_text(row.span),
            ]
        })
        .collect();
    write_table(out, &[], &ATOM_COLUMNS, &cells)
}

fn print_basis_set_table(
    out: &mut impl Write,
    summary: &BasisSetSummary<'_>,
    precision: usize,
) -> io::Result<()> {
    let basis_set = summary.basis_set;
    let title = [
        format!("{} - {}", basis_set.element, basis_set.kind()),
        format!(
            "Used by {} atoms · {} functions · {} primitives",
            summary.atoms_using,
            basis_set.basis_functions.len(),
            basis_set.primitive_count()
        ),
    ];

    let mut cells = Vec::with_capacity(basis_set.primitive_count());
    for function in &basis_set.basis_functions {
        for (i, primitive) in function.primitives.iter().enumerate() {
            let code = if i == 0 { function.function_type.code() } else { "" };
            cells.push(vec![
                code.to_string(),
                format_scientific(primitive.exponent, precision),
                format_scientific(primitive.s_coeff, precision),
                format_scientific(primitive.p_coeff, precision),
                format_scientific(primitive.dfg_coeff, precision),
            ]);
        }
    }
    write_table(out, &title, &PRIMITIVE_COLUMNS, &cells)
}

fn print_orbital_table(out: &mut impl Write, atom: &AtomOrbitals) -> io::Result<()> {
    let title = [
        format!("Atom {} - {}", atom.label, atom.symbol),
        atom.kind.to_string(),
    ];

    let mut cells = Vec::new();
    for shell in &atom.shells {
        cells.push(vec![
            shell.function_type.code().to_string(),
            String::new(),
            String::new(),
        ]);
        for orbital in &shell.orbitals {
            cells.push(vec![
                String::new(),
                orbital.index.to_string(),
                orbital.label.to_string(),
            ]);
        }
    }
    write_table(out, &title, &ORBITAL_COLUMNS, &cells)
}

fn span_text(span: OrbitalSpan) -> String {
    if span.is_empty() {
        "-".to_string()
    } else {
        format!("{}-{}", span.first(), span.last())
    }
}

/// Formats `value` as `d.dddE+XX`, the notation CRYSTAL prints coefficients in.
pub fn format_scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or_default();
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}E{sign}{:02}", exponent.abs())
        }
        None => formatted,
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{text:<width$}"),
        Align::Center => format!("{text:^width$}"),
        Align::Right => format!("{text:>width$}"),
    }
}

fn write_table(
    out: &mut impl Write,
    title: &[String],
    columns: &[Column],
    rows: &[Vec<String>],
) -> io::Result<()> {
    let inner_width: usize =
        columns.iter().map(|c| c.width + 2).sum::<usize>() + columns.len().saturating_sub(1);
    let rule = |left: &str, joint: &str, right: &str| {
        let segments: Vec<String> = columns.iter().map(|c| "─".repeat(c.width + 2)).collect();
        format!("{INDENT}{left}{}{right}", segments.join(joint))
    };

    if title.is_empty() {
        writeln!(out, "{}", rule("┌", "┬", "┐"))?;
    } else {
        writeln!(out, "{INDENT}┌{}┐", "─".repeat(inner_width))?;
        let text_width = inner_width.saturating_sub(2);
        for line in title {
            writeln!(out, "{INDENT}│ {} │", pad(line, text_width, Align::Center))?;
        }
        writeln!(out, "{}", rule("├", "┬", "┤"))?;
    }

    let header: Vec<String> = columns
        .iter()
        .map(|c| pad(c.title, c.width, Align::Center))
        .collect();
    writeln!(out, "{INDENT}│ {} │", header.join(" │ "))?;
    writeln!(out, "{}", rule("├", "┼", "┤"))?;

    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .zip(row)
            .map(|(c, cell)| pad(cell, c.width, c.align))
            .collect();
        writeln!(out, "{INDENT}│ {} │", cells.join(" │ "))?;
    }
    writeln!(out, "{}", rule("└", "┴", "┘"))
}
