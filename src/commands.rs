use owo_colors::OwoColorize;
use polyinclude::config::{load_config, write_config, PolyincludeConfig};
use polyinclude::dataset::{canonical_component_name, variation_name};
use polyinclude::output::{emit_success, is_quiet, OutputMode};
use polyinclude::ui::{self, CoverageRow, Icons, VariationRow};
use polyinclude::{Dataset, IncludeStatement, Language, Registry, RenderedInclude, Resolver};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Settings shared by every command
pub struct Context {
    pub mode: OutputMode,
    pub config_path: PathBuf,
    pub config: PolyincludeConfig,
}

impl Context {
    pub fn load(mode: OutputMode, config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config_path = config_path.unwrap_or_else(polyinclude::config::default_config_path);
        let config = match load_config(Some(&config_path))? {
            Some(config) => {
                tracing::debug!("Loaded config from {}", config_path.display());
                config
            }
            None => PolyincludeConfig::default(),
        };
        Ok(Self { mode, config_path, config })
    }

    fn base_dir(&self) -> &Path {
        self.config_path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn registry(&self) -> anyhow::Result<Registry> {
        self.config.build_registry(self.base_dir())
    }
}

pub struct ResolveArgs {
    pub language: Language,
    pub component: String,
    pub variation: Option<String>,
    pub alias: Option<String>,
    pub code: bool,
}

pub fn run_resolve(ctx: &Context, args: ResolveArgs) -> anyhow::Result<()> {
    let registry = ctx.registry()?;
    let resolver = Resolver::with_default_adapters(&registry);

    let variation = match args.variation {
        Some(variation) => variation,
        None => registry.component(args.language, &args.component)?.default_variation.clone(),
    };
    let mut statement = IncludeStatement::new(args.language, args.component, variation);
    statement.alias = args.alias;

    emit_include(ctx, &resolver, "resolve", &statement, args.code)
}

pub fn run_alias(ctx: &Context, name: &str, code: bool) -> anyhow::Result<()> {
    let registry = ctx.registry()?;
    let resolver = Resolver::with_default_adapters(&registry);
    let statement = registry
        .alias(name)
        .cloned()
        .ok_or_else(|| polyinclude::Error::AliasNotFound { alias: name.to_string() })?;

    emit_include(ctx, &resolver, "alias", &statement, code)
}

fn emit_include(
    ctx: &Context,
    resolver: &Resolver<'_>,
    command: &str,
    statement: &IncludeStatement,
    with_code: bool,
) -> anyhow::Result<()> {
    let rendered = if with_code {
        resolver.render(statement)?
    } else {
        RenderedInclude {
            resolved: resolver.resolve(statement)?,
            code: String::new(),
        }
    };

    if !ctx.mode.is_human() {
        return match with_code {
            true => emit_success(ctx.mode, command, &rendered),
            false => emit_success(ctx.mode, command, &rendered.resolved),
        };
    }

    let resolved = &rendered.resolved;
    if !is_quiet() {
        ui::header(&format!(
            "{} {}/{}",
            ui::language(statement.language),
            resolved.component.name.bold(),
            resolved.variation.name
        ));
        ui::summary_row("description", &resolved.variation.description);
        if !resolved.dependencies.is_empty() {
            ui::summary_row("dependencies", &resolved.dependencies.join(", "));
        }
        println!();
    }
    ui::code_block(&resolved.import_statement);
    if with_code {
        println!();
        ui::code_block(&rendered.code);
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LanguageSummary {
    language: Language,
    description: String,
    import_style: String,
    components: usize,
    variations: usize,
}

pub fn run_languages(ctx: &Context) -> anyhow::Result<()> {
    let registry = ctx.registry()?;
    let summaries: Vec<LanguageSummary> = registry
        .languages()
        .map(|l| LanguageSummary {
            language: l.name,
            description: l.description.clone(),
            import_style: l.import_style.to_string(),
            components: l.component_count(),
            variations: l.variation_count(),
        })
        .collect();

    if !ctx.mode.is_human() {
        return emit_success(ctx.mode, "languages", &summaries);
    }

    ui::section("Languages");
    for summary in &summaries {
        println!(
            "{} {:<12} {} components, {} variations {}",
            Icons::GLOBE,
            ui::language(summary.language),
            summary.components,
            summary.variations,
            ui::muted(&format!("({} imports)", summary.import_style))
        );
        if !is_quiet() {
            println!("   {}", ui::dim(&summary.description));
        }
    }
    Ok(())
}

pub fn run_components(ctx: &Context, language: Language) -> anyhow::Result<()> {
    let registry = ctx.registry()?;
    let definition = registry.language(language)?;

    if !ctx.mode.is_human() {
        let components: Vec<_> = definition
            .components
            .values()
            .map(|c| {
                serde_json::json!({
                    "name": c.name,
                    "category": c.category.as_str(),
                    "defaultVariation": c.default_variation,
                    "variations": c.variations.len(),
                })
            })
            .collect();
        return emit_success(ctx.mode, "components", components);
    }

    ui::section(&format!("{} components", language));
    for component in definition.components.values() {
        println!(
            "  {} {:<24} {} {}",
            Icons::PUZZLE,
            component.name.bold(),
            ui::muted(component.category.as_str()),
            ui::dim(&format!("{} variations", component.variations.len()))
        );
    }
    Ok(())
}

pub fn run_variations(ctx: &Context, language: Language, component: &str) -> anyhow::Result<()> {
    let registry = ctx.registry()?;
    let definition = registry.component(language, component)?;

    if !ctx.mode.is_human() {
        return emit_success(ctx.mode, "variations", definition);
    }

    ui::header(&format!("{} {}", ui::language(language), definition.name.bold()));
    if !is_quiet() {
        ui::summary_row("description", &definition.description);
        ui::summary_row("default", &definition.default_variation);
    }
    let rows: Vec<VariationRow> = definition
        .variations
        .iter()
        .map(|v| VariationRow {
            name: v.name.clone(),
            import_path: v.import_path.clone(),
            description: v.description.clone(),
        })
        .collect();
    println!("{}", ui::render_table(&rows));
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CoverageReport {
    language: Language,
    components: usize,
    variations: usize,
    missing: Vec<String>,
}

/// Every dataset component and variation must resolve and render in every
/// configured language.
pub fn run_check(ctx: &Context) -> anyhow::Result<()> {
    let dataset = ctx.config.dataset(ctx.base_dir())?;
    let registry = ctx.config.registry_for(&dataset);
    let resolver = Resolver::with_default_adapters(&registry);

    let reports = coverage(&dataset, &resolver);
    let missing: usize = reports.iter().map(|r| r.missing.len()).sum();

    if ctx.mode.is_human() {
        ui::section("Coverage");
        let rows: Vec<CoverageRow> = reports
            .iter()
            .map(|r| CoverageRow {
                language: r.language.to_string(),
                components: r.components,
                variations: r.variations,
                missing: r.missing.len(),
            })
            .collect();
        println!("{}", ui::render_table(&rows));
        for report in &reports {
            for statement in &report.missing {
                ui::warn(&format!("missing {}", statement));
            }
        }
    }

    // JSON mode prints exactly one envelope: the error one from `main` on failure.
    if missing > 0 {
        anyhow::bail!("{} dataset variations do not resolve", missing);
    }
    if ctx.mode.is_human() {
        ui::success("Every dataset variation resolves in every language");
        Ok(())
    } else {
        emit_success(ctx.mode, "check", &reports)
    }
}

fn coverage(dataset: &Dataset, resolver: &Resolver<'_>) -> Vec<CoverageReport> {
    let mut reports = Vec::new();
    for language in resolver.list_languages() {
        let mut report = CoverageReport {
            language,
            components: 0,
            variations: 0,
            missing: Vec::new(),
        };
        for entry in &dataset.components {
            if entry.slug.trim().is_empty() {
                continue;
            }
            let component = canonical_component_name(&entry.slug);
            report.components += 1;
            for example in &entry.variations {
                let variation = variation_name(&entry.slug, &example.example_slug);
                report.variations += 1;
                let statement = IncludeStatement::new(language, component.clone(), variation);
                if let Err(err) = resolver.render(&statement) {
                    tracing::debug!("{}: {}", statement, err);
                    report.missing.push(statement.to_string());
                }
            }
        }
        reports.push(report);
    }
    reports
}

pub fn run_init(mode: OutputMode, path: &Path, force: bool) -> anyhow::Result<()> {
    write_config(path, &PolyincludeConfig::starter(), force)?;

    if mode.is_human() {
        ui::success(&format!("Wrote {}", path.display()));
    } else {
        emit_success(mode, "init", serde_json::json!({ "path": path.display().to_string() }))?;
    }
    Ok(())
}

pub fn run_version(mode: OutputMode) -> anyhow::Result<()> {
    if mode.is_human() {
        ui::banner(
            &format!("{}", "Polyinclude".bold().style(ui::theme().info.clone())),
            &format!("Version {}", env!("CARGO_PKG_VERSION")),
        );
    } else {
        emit_success(mode, "version", serde_json::json!({ "version": env!("CARGO_PKG_VERSION") }))?;
    }
    Ok(())
}
