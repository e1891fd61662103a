use clap::Parser;
use color_eyre::eyre::bail;
use color_eyre::Result;

use facility_inspector::backend::SnapshotBackend;
use facility_inspector::config::{Args, Mode};
use facility_inspector::export::{export_csv, export_json};
use facility_inspector::layout::{FacilityCatalog, LayoutIssue, LayoutRegistry};
use facility_inspector::logging;
use facility_inspector::ui::App;
use facility_inspector::view::Orchestrator;

fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = Args::parse().into_settings()?;
    logging::init(&settings.log_level, &settings.log_target)?;

    let catalog = FacilityCatalog::builtin();
    let issues = LayoutRegistry::builtin().validate(&catalog);

    match settings.mode {
        Mode::CheckLayouts => {
            if issues.is_empty() {
                println!("All {} floor plans match the catalog", LayoutRegistry::builtin().len());
                return Ok(());
            }
            for issue in &issues {
                println!("{issue}");
            }
            bail!("{} layout issue(s) found", issues.len());
        }
        Mode::Export { data, csv, json } => {
            warn_layout_issues(&issues);
            let mut orchestrator = Orchestrator::with_builtin_layouts(SnapshotBackend::open(&data)?);
            orchestrator.apply(settings.initial_state);

            let view = orchestrator.view();
            if let Some(error) = &view.error {
                tracing::warn!(%error, "exporting layout without live data");
            }
            let query = orchestrator.state().query();

            if let Some(csv_path) = &csv {
                export_csv(view, query, csv_path)?;
                println!("Exported to CSV: {}", csv_path.display());
            }

            if let Some(json_path) = &json {
                export_json(view, query, json_path)?;
                println!("Exported to JSON: {}", json_path.display());
            }
            Ok(())
        }
        Mode::Interactive { data } => {
            warn_layout_issues(&issues);
            let mut orchestrator = Orchestrator::with_builtin_layouts(SnapshotBackend::open(&data)?);
            orchestrator.apply(settings.initial_state);
            let mut app = App::new(orchestrator, catalog);

            let terminal = ratatui::init();
            let result = app.run(terminal);
            ratatui::restore();
            result?;

            let backend = app.into_orchestrator().into_backend();
            if backend.is_dirty() {
                backend.save()?;
            }
            Ok(())
        }
    }
}

fn warn_layout_issues(issues: &[LayoutIssue]) {
    for issue in issues {
        tracing::warn!(%issue, "layout registry gap");
    }
}
