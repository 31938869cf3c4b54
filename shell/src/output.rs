//! Text rendering of the view

use std::io::{self, Write};

use todo_core::view::{RenderModel, TaskRow};
use todo_core::{Confirmation, Labels, Notice, NoticeKind, Prefill};

pub fn write_view(
    out: &mut impl Write,
    view: &RenderModel,
    labels: &Labels,
    json: bool,
) -> io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, view)?;
        return writeln!(out);
    }

    if view.is_empty {
        writeln!(out, "  ({})", labels.empty_state)?;
    }
    for (index, row) in view.rows.iter().enumerate() {
        write_row(out, index + 1, row)?;
    }
    writeln!(
        out,
        "{}: {}  {}: {}  {}: {}",
        labels.count_total,
        view.counts.total,
        labels.count_pending,
        view.counts.pending,
        labels.count_completed,
        view.counts.completed
    )
}

fn write_row(out: &mut impl Write, number: usize, row: &TaskRow) -> io::Result<()> {
    let check = if row.done { "x" } else { " " };
    write!(out, "{number:>3}. [{check}] {}  ({})", row.title, row.date_label)?;
    if let Some(badge) = &row.badge {
        let marker = if badge.overdue { "!" } else { "" };
        write!(out, "  [{}{marker}]", badge.label)?;
    }
    writeln!(out)
}

pub fn write_notice(out: &mut impl Write, notice: &Notice) -> io::Result<()> {
    let tag = match notice.kind {
        NoticeKind::Success => "ok",
        NoticeKind::Info => "info",
    };
    writeln!(out, "[{tag}] {}", notice.message)
}

pub fn write_prefill(out: &mut impl Write, prefill: &Prefill) -> io::Result<()> {
    match &prefill.date {
        Some(date) => writeln!(out, "  add {} @{date}", prefill.text),
        None => writeln!(out, "  add {}", prefill.text),
    }
}

pub fn write_confirmation(out: &mut impl Write, confirmation: &Confirmation) -> io::Result<()> {
    writeln!(out, "{}", confirmation.title)?;
    write!(out, "{} [y/N] ", confirmation.message)?;
    out.flush()
}
