use anyhow::{bail, Context, Result};
use rimworld_mod_gen::{
    cli::{Cli, Commands},
    config::{Settings, SettingsManager},
    filter::resolve_categories,
    generator::{Generator, ModInfo, ResearchMode},
    model::{get_category, ALL_CATEGORIES},
    project::ModProject,
    ui::{ConsoleUi, Phase, Ui, UiApp},
    writer::{write_mod, WriteOptions, WriteSummary},
    xml::to_xml_string,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let settings_manager = SettingsManager::new(cli.config)?;
    let settings = settings_manager.load()?;

    match cli.command {
        Commands::Generate {
            project,
            output,
            only,
            skip,
            research_mode,
            force,
            tui,
        } => {
            let start = Instant::now();

            let categories = resolve_categories(only, skip)?;
            let output_root = output
                .or_else(|| settings.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));

            let loaded = ModProject::load(&project)?;
            let options = WriteOptions {
                research_mode: pick_research_mode(research_mode, &loaded, &settings),
                categories,
                overwrite: force,
            };

            if tui {
                let mut ui = UiApp::new(loaded.info.name.trim())?;
                ui.set_phase(Phase::Loading);
                ui.log(format!("Loaded {:?} ({} records)", project, loaded.store.total()));
                match write_mod(&loaded, &output_root, &options, &mut ui) {
                    Ok(summary) => ui.finish(&summary_line(&summary, start))?,
                    Err(e) => {
                        ui.restore()?;
                        return Err(e);
                    }
                }
            } else {
                let mut ui = ConsoleUi::new();
                ui.set_phase(Phase::Loading);
                ui.log(format!("Loaded {:?} ({} records)", project, loaded.store.total()));
                let summary = write_mod(&loaded, &output_root, &options, &mut ui)?;
                ui.clear_progress();
                print_summary(&summary, start);
            }
        }

        Commands::Validate { project } => {
            let loaded = ModProject::load(&project)?;
            let generator = Generator::new(&loaded.store, ResearchMode::Inline);
            for spec in ALL_CATEGORIES {
                if loaded.store.len(spec.category) > 0 {
                    generator
                        .generate(spec.category)
                        .with_context(|| format!("{} would fail to generate", spec.file_name))?;
                }
            }

            println!("{:?} is valid", project);
            for spec in ALL_CATEGORIES {
                let count = loaded.store.len(spec.category);
                if count > 0 {
                    println!("  {:<12} {}", spec.key, count);
                }
            }
        }

        Commands::Show {
            project,
            category,
            research_mode,
        } => {
            let Some(spec) = get_category(&category) else {
                bail!("Unknown category '{}'", category);
            };
            let loaded = ModProject::load(&project)?;
            let mode = pick_research_mode(research_mode, &loaded, &settings);
            let defs = Generator::new(&loaded.store, mode)
                .generate(spec.category)
                .with_context(|| format!("Failed to generate {}", spec.file_name))?;
            print!("{}", to_xml_string(&defs)?);
        }

        Commands::Init {
            project,
            name,
            author,
            force,
        } => {
            init_project(&project, name, author, force, &settings)?;
            println!("Created {:?}", project);
        }

        Commands::ListCategories => {
            println!("Available categories:\n");
            for spec in ALL_CATEGORIES {
                println!("  {:<12} -> Defs/{}", spec.key, spec.file_name);
            }
        }

        Commands::Config => {
            println!("Settings file: {:?}", settings_manager.path());
            let json =
                serde_json::to_string_pretty(&settings).context("Failed to serialize settings")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Command line beats the project file, which beats user settings
fn pick_research_mode(
    flag: Option<ResearchMode>,
    project: &ModProject,
    settings: &Settings,
) -> ResearchMode {
    flag.or_else(|| project.components.research_mode())
        .unwrap_or(settings.research_mode)
}

fn init_project(
    path: &Path,
    name: Option<String>,
    author: Option<String>,
    force: bool,
    settings: &Settings,
) -> Result<()> {
    if path.exists() && !force {
        bail!("{:?} already exists (use --force to overwrite)", path);
    }

    let info = ModInfo {
        name: name.unwrap_or_default(),
        author: author
            .or_else(|| settings.default_author.clone())
            .unwrap_or_default(),
        supported_versions: settings.supported_versions.clone(),
        ..Default::default()
    };
    ModProject::new(info).save(path)
}

fn summary_line(summary: &WriteSummary, start: Instant) -> String {
    format!(
        "Created {:?} ({} records, {} files, {} assets) in {:.1}s",
        summary.mod_dir,
        summary.records,
        summary.files.len(),
        summary.assets.len(),
        start.elapsed().as_secs_f64()
    )
}

fn print_summary(summary: &WriteSummary, start: Instant) {
    println!("\n{}", summary_line(summary, start));

    if !summary.asset_failures.is_empty() {
        println!("\n{} asset(s) could not be copied:", summary.asset_failures.len());
        for failure in &summary.asset_failures {
            println!("  - {}", failure);
        }
    }
}
