//! Minijinja templates for every screen.
//!
//! Column widths and padding are computed in `render.rs`; templates only pick styles.
//! Rendered output has no trailing newline; callers add it.

pub const BANNER_TEMPLATE: &str = r#"
  {{ top | style("banner") }}
  {{ middle | style("banner") }}
  {{ bottom | style("banner") }}"#;

pub const MENU_TEMPLATE: &str = r#"
  ┌─────────────────────────────────┐
  │{{ title | style("title") }}│
  ├─────────────────────────────────┤
{% for item in items %}  │  {{ item.key | style("menu_key") }}. {{ item.label }}│
{% endfor %}  └─────────────────────────────────┘"#;

pub const HEADER_TEMPLATE: &str = r#"
{{ rule | style("rule") }}
{{ title | style("title") }}
{{ rule | style("rule") }}"#;

pub const STUDENT_TABLE_TEMPLATE: &str = r#"{% if empty %}  {{ empty_message | style("warning") }}{% else %}  {{ header | style("header") }}
  {{ divider | style("rule") }}
{% for row in rows %}  {{ row.cells }}{{ row.grade | style(row.grade_style) }}
{% endfor %}{{ rule | style("rule") }}
  Total students: {{ count | style("count") }}{% endif %}"#;

pub const STUDENT_DETAIL_TEMPLATE: &str = r#"
  ── Student Found ─────────────────────────
  Name        : {{ name | style("name") }}
  Roll Number : {{ roll }}
  Marks       :
{% for mark in marks %}    {{ mark.subject }}: {{ mark.value }}
{% endfor %}  Total       : {{ total }}
  Average     : {{ average }}
  Grade       : {{ grade | style(grade_style) }}
  ──────────────────────────────────────────"#;

pub const RANKING_TEMPLATE: &str = r#"{% if empty %}  {{ empty_message | style("warning") }}{% else %}  {{ header | style("header") }}
  {{ divider | style("rule") }}
{% for row in rows %}  {{ row.rank | style("rank") }}{{ row.cells }}{{ row.grade | style(row.grade_style) }}
{% endfor %}{{ rule | style("rule") }}{% endif %}"#;

pub const STATS_TEMPLATE: &str = r#"  Total Students   : {{ total_students | style("count") }}
  Class Average    : {{ class_average }}
  Highest Scorer   : {{ highest_name | style("name") }} ({{ highest_total }})
  Lowest Scorer    : {{ lowest_name | style("name") }} ({{ lowest_total }})

  ── Grade Distribution ────────────────────
{% for row in grades %}    {{ row.grade | style(row.grade_style) }} : {{ row.bar | style("bar") }} ({{ row.count }})
{% endfor %}  ──────────────────────────────────────────"#;

pub const TEXT_LIST_TEMPLATE: &str = r#"{% if lines %}{% for line in lines %}{{ line }}
{% endfor %}{% else %}{{ empty_message | style("info") }}{% endif %}"#;

pub const MESSAGES_TEMPLATE: &str = r#"{% for message in messages %}  {{ message.content | style(message.style) }}
{% endfor %}"#;
