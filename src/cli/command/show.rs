use std::path::Path;

use anyhow::Result;

use crate::{
    deserialise::read_records,
    month::{Month, MonthCursor},
    reading::summary::summarize_year,
    session::Session,
};

use super::render_summary;

/// Summary of one month, or of every month with `all`.
pub fn show(file_path: &Path, month: Month, all: bool) -> Result<String> {
    if all {
        return show_year(file_path);
    }

    let mut session = Session::new(file_path);
    let summary = session.load_at(file_path, month)?;

    Ok(render_summary(session.cursor(), &summary))
}

fn show_year(file_path: &Path) -> Result<String> {
    let records = read_records(file_path)?;
    let reports: Vec<String> = summarize_year(&records)
        .iter()
        .map(|(month, summary)| render_summary(&MonthCursor::at(*month), summary))
        .collect();

    if reports.is_empty() {
        anyhow::bail!("No records in `{}`", file_path.display());
    }

    Ok(reports.join("\n\n"))
}

// -- Tests -------------------------------------------------------------------
