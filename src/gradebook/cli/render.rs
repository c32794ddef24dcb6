//! # Rendering Module
//!
//! Styled terminal output through minijinja templates and the gradebook theme.
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they need
//! Unicode-aware processing. Templates handle presentation:
//! - Style selection through the `style` filter
//! - Section rules and grouping
//!
//! When color is off the `style` filter passes text through untouched, so the same
//! templates serve terminals, pipes and tests.

use super::styles::{names, Theme, GRADEBOOK_THEME};
use super::templates::{
    BANNER_TEMPLATE, HEADER_TEMPLATE, MENU_TEMPLATE, MESSAGES_TEMPLATE, RANKING_TEMPLATE,
    STATS_TEMPLATE, STUDENT_DETAIL_TEMPLATE, STUDENT_TABLE_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use gradebook::api::{CmdMessage, MessageLevel};
use gradebook::commands::{ClassStats, RankedRecord};
use gradebook::model::{Grade, StudentRecord, Subject};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const NARROW_RULE: usize = 45;
pub const RANKING_RULE: usize = 55;
pub const TABLE_RULE: usize = 75;
const MENU_INNER_WIDTH: usize = 33;
const MENU_LABEL_WIDTH: usize = 28;

const ROLL_WIDTH: usize = 10;
const NAME_WIDTH: usize = 20;
const MARK_WIDTH: usize = 6;
const TOTAL_WIDTH: usize = 8;
const RANK_WIDTH: usize = 6;
const RANK_ROLL_WIDTH: usize = 12;
const RANK_NAME_WIDTH: usize = 22;
const RANK_TOTAL_WIDTH: usize = 10;
const DETAIL_SUBJECT_WIDTH: usize = 12;

pub const MENU_ITEMS: [(&str, &str); 7] = [
    ("1", "Add Student"),
    ("2", "View All Students"),
    ("3", "Search Student by Roll No."),
    ("4", "Class Statistics"),
    ("5", "Update Student Marks"),
    ("6", "Sort Students by Total Marks"),
    ("7", "Exit"),
];

pub const NO_STUDENTS: &str = "No students found. Please add students first.";

#[derive(Serialize)]
struct BannerData {
    top: String,
    middle: String,
    bottom: String,
}

#[derive(Serialize)]
struct MenuItemData {
    key: String,
    label: String,
}

#[derive(Serialize)]
struct MenuData {
    title: String,
    items: Vec<MenuItemData>,
}

#[derive(Serialize)]
struct HeaderData {
    rule: String,
    title: String,
}

#[derive(Serialize)]
struct TableRowData {
    cells: String,
    grade: String,
    grade_style: String,
}

#[derive(Serialize)]
struct StudentTableData {
    empty: bool,
    empty_message: String,
    header: String,
    divider: String,
    rows: Vec<TableRowData>,
    rule: String,
    count: usize,
}

#[derive(Serialize)]
struct MarkLineData {
    subject: String,
    value: String,
}

#[derive(Serialize)]
struct StudentDetailData {
    name: String,
    roll: String,
    marks: Vec<MarkLineData>,
    total: String,
    average: String,
    grade: String,
    grade_style: String,
}

#[derive(Serialize)]
struct RankRowData {
    rank: String,
    cells: String,
    grade: String,
    grade_style: String,
}

#[derive(Serialize)]
struct RankingData {
    empty: bool,
    empty_message: String,
    header: String,
    divider: String,
    rows: Vec<RankRowData>,
    rule: String,
}

#[derive(Serialize)]
struct GradeRowData {
    grade: String,
    grade_style: String,
    bar: String,
    count: usize,
}

#[derive(Serialize)]
struct StatsData {
    total_students: usize,
    class_average: String,
    highest_name: String,
    highest_total: String,
    lowest_name: String,
    lowest_total: String,
    grades: Vec<GradeRowData>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Renders a template with explicit color control.
pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    register_style_filter(&mut env, theme.clone(), use_color);

    env.add_template_owned("_inline".to_string(), template.to_string())?;
    let tmpl = env.get_template("_inline")?;
    tmpl.render(data)
}

fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
}

/// Screen renderer for the menu session.
#[derive(Debug, Clone)]
pub struct Renderer {
    use_color: bool,
    bar_glyph: String,
}

impl Renderer {
    pub fn new(use_color: bool, bar_glyph: impl Into<String>) -> Self {
        Self {
            use_color,
            bar_glyph: bar_glyph.into(),
        }
    }

    fn render<T: Serialize>(&self, template: &str, data: &T) -> String {
        render_with_color(template, data, &GRADEBOOK_THEME, self.use_color)
            .map(|out| out.trim_end_matches('\n').to_string())
            .unwrap_or_else(|e| format!("Render error: {}", e))
    }

    pub fn banner(&self) -> String {
        let inner = 42;
        let data = BannerData {
            top: format!("╔{}╗", "═".repeat(inner)),
            middle: format!("║{}║", center("STUDENT RECORD MANAGEMENT SYSTEM", inner)),
            bottom: format!("╚{}╝", "═".repeat(inner)),
        };
        self.render(BANNER_TEMPLATE, &data)
    }

    pub fn menu(&self) -> String {
        let data = MenuData {
            title: center("MAIN MENU", MENU_INNER_WIDTH),
            items: MENU_ITEMS
                .iter()
                .map(|(key, label)| MenuItemData {
                    key: key.to_string(),
                    label: pad_to_width(label, MENU_LABEL_WIDTH),
                })
                .collect(),
        };
        self.render(MENU_TEMPLATE, &data)
    }

    pub fn header(&self, title: &str, width: usize) -> String {
        let data = HeaderData {
            rule: "=".repeat(width),
            title: center(title, width).trim_end().to_string(),
        };
        self.render(HEADER_TEMPLATE, &data)
    }

    /// Prompt label, styled but without a trailing newline.
    pub fn prompt(&self, label: &str) -> String {
        GRADEBOOK_THEME.apply(names::PROMPT, label, self.use_color)
    }

    pub fn student_table(&self, records: &[StudentRecord]) -> String {
        let marks_header = Subject::ALL
            .iter()
            .map(|s| pad_to_width(s.short_name(), MARK_WIDTH))
            .collect::<Vec<_>>()
            .join(" ");
        let header = format!(
            "{} {} {}  {} {} Grade",
            pad_to_width("Roll", ROLL_WIDTH),
            pad_to_width("Name", NAME_WIDTH),
            marks_header,
            pad_to_width("Total", TOTAL_WIDTH),
            pad_to_width("Avg", TOTAL_WIDTH),
        );

        let rows = records
            .iter()
            .map(|record| {
                let marks = record
                    .marks()
                    .iter()
                    .map(|(_, m)| pad_to_width(&format!("{:.1}", m), MARK_WIDTH))
                    .collect::<Vec<_>>()
                    .join(" ");
                TableRowData {
                    cells: format!(
                        "{} {} {}  {} {} ",
                        pad_to_width(record.roll(), ROLL_WIDTH),
                        pad_to_width(record.name(), NAME_WIDTH),
                        marks,
                        pad_to_width(&format!("{:.1}", record.total()), TOTAL_WIDTH),
                        pad_to_width(&format!("{:.2}", record.average()), TOTAL_WIDTH),
                    ),
                    grade: record.grade().to_string(),
                    grade_style: grade_style(record.grade()).to_string(),
                }
            })
            .collect();

        let data = StudentTableData {
            empty: records.is_empty(),
            empty_message: NO_STUDENTS.to_string(),
            header,
            divider: "-".repeat(TABLE_RULE - 4),
            rows,
            rule: "=".repeat(TABLE_RULE),
            count: records.len(),
        };
        self.render(STUDENT_TABLE_TEMPLATE, &data)
    }

    pub fn student_detail(&self, record: &StudentRecord) -> String {
        let data = StudentDetailData {
            name: record.name().to_string(),
            roll: record.roll().to_string(),
            marks: record
                .marks()
                .iter()
                .map(|(subject, mark)| MarkLineData {
                    subject: pad_to_width(subject.name(), DETAIL_SUBJECT_WIDTH),
                    value: format!("{:.1}", mark),
                })
                .collect(),
            total: format!("{:.1}", record.total()),
            average: format!("{:.2}", record.average()),
            grade: record.grade().to_string(),
            grade_style: grade_style(record.grade()).to_string(),
        };
        self.render(STUDENT_DETAIL_TEMPLATE, &data)
    }

    pub fn ranking(&self, ranked: &[RankedRecord]) -> String {
        let header = format!(
            "{} {} {} {} Grade",
            pad_to_width("Rank", RANK_WIDTH),
            pad_to_width("Roll", RANK_ROLL_WIDTH),
            pad_to_width("Name", RANK_NAME_WIDTH),
            pad_to_width("Total", RANK_TOTAL_WIDTH),
        );
        let rows = ranked
            .iter()
            .map(|entry| RankRowData {
                rank: pad_to_width(&entry.rank.to_string(), RANK_WIDTH),
                cells: format!(
                    " {} {} {} ",
                    pad_to_width(entry.record.roll(), RANK_ROLL_WIDTH),
                    pad_to_width(entry.record.name(), RANK_NAME_WIDTH),
                    pad_to_width(&format!("{:.1}", entry.record.total()), RANK_TOTAL_WIDTH),
                ),
                grade: entry.record.grade().to_string(),
                grade_style: grade_style(entry.record.grade()).to_string(),
            })
            .collect();

        let data = RankingData {
            empty: ranked.is_empty(),
            empty_message: "No students found.".to_string(),
            header,
            divider: "-".repeat(RANKING_RULE - 4),
            rows,
            rule: "=".repeat(RANKING_RULE),
        };
        self.render(RANKING_TEMPLATE, &data)
    }

    pub fn stats(&self, stats: &ClassStats) -> String {
        let grades = stats
            .grade_distribution
            .iter()
            .map(|(grade, count)| GradeRowData {
                grade: grade.to_string(),
                grade_style: grade_style(grade).to_string(),
                bar: self.bar_glyph.repeat(count),
                count,
            })
            .collect();

        let data = StatsData {
            total_students: stats.total_students,
            class_average: format!("{:.2}", stats.class_average),
            highest_name: stats.highest_scorer.name().to_string(),
            highest_total: format!("{:.1}", stats.highest_scorer.total()),
            lowest_name: stats.lowest_scorer.name().to_string(),
            lowest_total: format!("{:.1}", stats.lowest_scorer.total()),
            grades,
        };
        self.render(STATS_TEMPLATE, &data)
    }

    pub fn text_list(&self, lines: &[String], empty_message: &str) -> String {
        let data = TextListData {
            lines: lines.to_vec(),
            empty_message: empty_message.to_string(),
        };
        self.render(TEXT_LIST_TEMPLATE, &data)
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }

        let data = MessagesData {
            messages: messages
                .iter()
                .map(|msg| {
                    let (style, marker) = match msg.level {
                        MessageLevel::Info => (names::INFO, ""),
                        MessageLevel::Success => (names::SUCCESS, "✔  "),
                        MessageLevel::Warning => (names::WARNING, ""),
                        MessageLevel::Error => (names::ERROR, "[!] "),
                    };
                    MessageData {
                        content: format!("{}{}", marker, msg.content),
                        style: style.to_string(),
                    }
                })
                .collect(),
        };
        self.render(MESSAGES_TEMPLATE, &data)
    }
}

fn grade_style(grade: Grade) -> &'static str {
    match grade {
        Grade::A => names::GRADE_A,
        Grade::B => names::GRADE_B,
        Grade::C => names::GRADE_C,
        Grade::D => names::GRADE_D,
        Grade::F => names::GRADE_F,
    }
}

/// Pads `s` with spaces to exactly `width` display columns, truncating with `…` when
/// it does not fit.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = if s.width() > width {
        truncate_to_width(s, width)
    } else {
        s.to_string()
    };
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn center(s: &str, width: usize) -> String {
    let total = width.saturating_sub(s.width());
    let left = total / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(total - left))
}
