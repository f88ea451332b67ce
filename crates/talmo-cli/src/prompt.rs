//! Interactive prompting for unfilled form fields.
//!
//! Walks the fields that still have no value, in schema order, and reads
//! one line each. Empty input and values a select would not accept are
//! reported inline and re-prompted; the submission is never attempted with
//! a partially filled form.

use std::io::{BufRead, Write};

use anyhow::bail;
use talmo_core::{FieldDescriptor, FieldKind, Form};

/// Prompt for every field the form has no value for yet.
pub fn fill_missing<R: BufRead, W: Write>(
    form: &mut Form,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let missing: Vec<FieldDescriptor> = form.missing().into_iter().cloned().collect();
    for field in &missing {
        if field.kind == FieldKind::Select && field.options.is_empty() {
            bail!("'{}' is a select with no options and cannot be filled", field.label);
        }
        write_field_header(out, field)?;
        loop {
            write!(out, "> ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                bail!("input ended before '{}' was filled", field.label);
            }
            let value = line.trim();
            if value.is_empty() {
                writeln!(out, "'{}' is required but empty", field.label)?;
                continue;
            }
            if !field.accepts(value) {
                writeln!(out, "'{}' is not an option for '{}'", value, field.label)?;
                continue;
            }
            form.set_value(&field.id, value)?;
            break;
        }
    }
    Ok(())
}

fn write_field_header<W: Write>(out: &mut W, field: &FieldDescriptor) -> std::io::Result<()> {
    write!(out, "\n{}", field.label)?;
    if let Some(unit) = &field.unit {
        write!(out, " ({unit})")?;
    }
    writeln!(out)?;
    if let Some(desc) = &field.description {
        writeln!(out, "  {desc}")?;
    }
    if field.kind == FieldKind::Select {
        for opt in &field.options {
            writeln!(out, "  {} = {}", opt.value, opt.label)?;
        }
    }
    Ok(())
}
