use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prepended to text whose style name is not registered, to surface template typos.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const TITLE: &str = "title";
    pub const RULE: &str = "rule";
    pub const BANNER: &str = "banner";
    pub const HEADER: &str = "header";
    pub const MENU_KEY: &str = "menu_key";
    pub const NAME: &str = "name";
    pub const COUNT: &str = "count";
    pub const RANK: &str = "rank";
    pub const BAR: &str = "bar";
    pub const PROMPT: &str = "prompt";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
    pub const GRADE_A: &str = "grade_a";
    pub const GRADE_B: &str = "grade_b";
    pub const GRADE_C: &str = "grade_c";
    pub const GRADE_D: &str = "grade_d";
    pub const GRADE_F: &str = "grade_f";
}

/// A named collection of styles, applied through the `style` template filter.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning an updated theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style, or flags the text when the name is unknown.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static GRADEBOOK_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::TITLE, Style::new().bold())
        .add(names::RULE, Style::new().dim())
        .add(names::BANNER, Style::new().cyan().bold())
        .add(names::HEADER, Style::new().bold().underlined())
        .add(names::MENU_KEY, Style::new().yellow())
        .add(names::NAME, Style::new().bold())
        .add(names::COUNT, Style::new().cyan())
        .add(names::RANK, Style::new().yellow())
        .add(names::BAR, Style::new().blue())
        .add(names::PROMPT, Style::new().bold())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
        .add(names::GRADE_A, Style::new().green().bold())
        .add(names::GRADE_B, Style::new().green())
        .add(names::GRADE_C, Style::new().yellow())
        .add(names::GRADE_D, Style::new().magenta())
        .add(names::GRADE_F, Style::new().red().bold())
});
