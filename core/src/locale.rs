//! User-facing text
//!
//! Every string the core hands to a presentation layer comes from a
//! [`Labels`] table selected by [`Locale`].

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::schedule::Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Id,
}

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Self::En => &EN,
            Self::Id => &ID,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Self::En),
            "id" | "id-id" | "indonesian" => Ok(Self::Id),
            other => Err(format!("unsupported locale `{other}`; expected en|id")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => f.write_str("en"),
            Self::Id => f.write_str("id"),
        }
    }
}

/// Text table for one locale
#[derive(Debug)]
pub struct Labels {
    locale: Locale,
    pub today: &'static str,
    pub tomorrow: &'static str,
    pub unscheduled: &'static str,
    pub overdue: &'static str,
    pub high: &'static str,
    pub medium: &'static str,
    pub low: &'static str,
    pub empty_text: &'static str,
    pub missing_date: &'static str,
    pub task_added: &'static str,
    pub task_deleted: &'static str,
    pub task_completed: &'static str,
    pub task_reopened: &'static str,
    pub all_cleared: &'static str,
    pub edit_started: &'static str,
    pub nothing_to_clear: &'static str,
    pub confirm_delete_title: &'static str,
    pub confirm_clear_title: &'static str,
    pub empty_state: &'static str,
    pub count_total: &'static str,
    pub count_pending: &'static str,
    pub count_completed: &'static str,
    weekdays: [&'static str; 7],
    months: [&'static str; 12],
}

static EN: Labels = Labels {
    locale: Locale::En,
    today: "Today",
    tomorrow: "Tomorrow",
    unscheduled: "No due date",
    overdue: "Overdue",
    high: "High",
    medium: "Medium",
    low: "Low",
    empty_text: "Task cannot be empty.",
    missing_date: "A due date is required.",
    task_added: "Task added!",
    task_deleted: "Task deleted!",
    task_completed: "Task completed!",
    task_reopened: "Task marked as not done",
    all_cleared: "All tasks deleted!",
    edit_started: "Now edit your task",
    nothing_to_clear: "There are no tasks to delete",
    confirm_delete_title: "Delete Task",
    confirm_clear_title: "Delete All Tasks",
    empty_state: "No tasks to show",
    count_total: "Total",
    count_pending: "Pending",
    count_completed: "Completed",
    weekdays: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
};

static ID: Labels = Labels {
    locale: Locale::Id,
    today: "Hari ini",
    tomorrow: "Besok",
    unscheduled: "Tanggal tidak ditentukan",
    overdue: "Terlambat",
    high: "Tinggi",
    medium: "Sedang",
    low: "Rendah",
    empty_text: "Tugas tidak boleh kosong.",
    missing_date: "Tanggal harus diisi.",
    task_added: "Tugas berhasil ditambahkan!",
    task_deleted: "Tugas berhasil dihapus!",
    task_completed: "Tugas diselesaikan!",
    task_reopened: "Tugas ditandai belum selesai",
    all_cleared: "Semua tugas berhasil dihapus!",
    edit_started: "Sekarang edit tugas Anda",
    nothing_to_clear: "Tidak ada tugas untuk dihapus",
    confirm_delete_title: "Hapus Tugas",
    confirm_clear_title: "Hapus Semua Tugas",
    empty_state: "Tidak ada tugas untuk ditampilkan",
    count_total: "Total",
    count_pending: "Belum selesai",
    count_completed: "Selesai",
    weekdays: ["Sen", "Sel", "Rab", "Kam", "Jum", "Sab", "Min"],
    months: [
        "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
    ],
};

impl Labels {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn priority(&self, priority: Priority) -> &'static str {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    pub fn validation_message(&self, error: ValidationError) -> &'static str {
        match error {
            ValidationError::EmptyText => self.empty_text,
            ValidationError::MissingDate => self.missing_date,
        }
    }

    /// Weekday, day, month and year in the locale's customary order
    pub fn long_date(&self, date: NaiveDate) -> String {
        let weekday = self.weekdays[date.weekday().num_days_from_monday() as usize];
        let month = self.months[date.month0() as usize];
        match self.locale {
            Locale::En => format!("{weekday}, {month} {}, {}", date.day(), date.year()),
            Locale::Id => format!("{weekday}, {} {month} {}", date.day(), date.year()),
        }
    }

    pub fn confirm_delete_message(&self, text: &str) -> String {
        match self.locale {
            Locale::En => format!("Are you sure you want to delete the task \"{text}\"?"),
            Locale::Id => format!("Apakah Anda yakin ingin menghapus tugas \"{text}\"?"),
        }
    }

    pub fn confirm_clear_message(&self, count: usize) -> String {
        match self.locale {
            Locale::En => format!(
                "Are you sure you want to delete all {count} tasks? This cannot be undone."
            ),
            Locale::Id => format!(
                "Apakah Anda yakin ingin menghapus semua {count} tugas? Tindakan ini tidak dapat dibatalkan."
            ),
        }
    }
}
