use crate::language::Language;
use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub success: Style,
    pub error: Style,
    pub warn: Style,
    pub info: Style,
    pub dim: Style,
    pub muted: Style,
    pub code: Style,
    pub react: Style,
    pub vanilla: Style,
    pub extjs: Style,
    pub typescript: Style,
}

impl Theme {
    pub fn detect() -> Self {
        if !console::Term::stdout().is_term() || !console::colors_enabled() {
            return Self::plain();
        }
        Self::colored()
    }

    pub fn colored() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            warn: Style::new().yellow().bold(),
            info: Style::new().magenta(),
            dim: Style::new().white().dimmed(),
            muted: Style::new().bright_black(),
            code: Style::new().bright_white(),
            react: Style::new().bright_cyan(),
            vanilla: Style::new().bright_yellow(),
            extjs: Style::new().bright_green(),
            typescript: Style::new().bright_blue(),
        }
    }

    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            success: Style::new(),
            error: Style::new(),
            warn: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            muted: Style::new(),
            code: Style::new(),
            react: Style::new(),
            vanilla: Style::new(),
            extjs: Style::new(),
            typescript: Style::new(),
        }
    }

    /// Accent colour used wherever a language name is printed
    pub fn language(&self, language: Language) -> Style {
        match language {
            Language::React => self.react.clone(),
            Language::Vanilla => self.vanilla.clone(),
            Language::ExtJs => self.extjs.clone(),
            Language::TypeScript => self.typescript.clone(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
