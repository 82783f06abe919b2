pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{banner, code_block, dim, error, header, language, muted, section, success, summary_row, warn};
pub use table::{render as render_table, CoverageRow, VariationRow};
pub use theme::{theme, Theme};
