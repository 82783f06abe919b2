use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct VariationRow {
    #[tabled(rename = "Variation")]
    pub name: String,
    #[tabled(rename = "Import")]
    pub import_path: String,
    #[tabled(rename = "Description")]
    pub description: String,
}

#[derive(Tabled)]
pub struct CoverageRow {
    #[tabled(rename = "Language")]
    pub language: String,
    #[tabled(rename = "Components")]
    pub components: usize,
    #[tabled(rename = "Variations")]
    pub variations: usize,
    #[tabled(rename = "Missing")]
    pub missing: usize,
}

/// Rounded table, or the empty string for no rows
pub fn render<T: Tabled>(rows: &[T]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rows() {
        let rows = vec![VariationRow {
            name: "primary".to_string(),
            import_path: "@shopify/polaris".to_string(),
            description: "Primary button".to_string(),
        }];
        let table = render(&rows);
        assert!(table.contains("Variation"));
        assert!(table.contains("@shopify/polaris"));
        assert!(render::<CoverageRow>(&[]).is_empty());
    }
}
