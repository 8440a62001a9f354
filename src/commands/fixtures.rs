use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::cli::{
    CalibrateArgs, Cli, FixturesAction, FixturesArgs, GenerateArgs, PerfArgs, ValidateArgs,
    VerifyArgs,
};
use crate::config::Config;
use crate::error::NxlcError;
use crate::fixtures::runner::{Executor, RegistryLineCounter, Reporter, StrategyRegistry};
use crate::fixtures::{
    CalibrationOutcome, Calibrator, Fixture, FixtureGenerator, PerformanceChecker,
    find_language_dir, load_all, validate::ValidatorSuite,
};
use crate::language::{Category, LanguageRegistry};
use crate::output::ScanProgress;
use crate::{EXIT_CONFIG_ERROR, EXIT_FAILURE, EXIT_SUCCESS, Result};

use super::context::{build_registry, fixture_root, load_config, write_output};

#[must_use]
pub fn run_fixtures(args: &FixturesArgs, cli: &Cli) -> i32 {
    match run_fixtures_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::debug!(error_type = e.error_type(), "fixtures command failed");
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// # Errors
/// Returns an error if the config is invalid or the fixture tree cannot be
/// read or written.
pub fn run_fixtures_impl(args: &FixturesArgs, cli: &Cli) -> Result<i32> {
    match &args.action {
        FixturesAction::Perf(perf) => run_perf(perf, cli),
        FixturesAction::Generate(generate) => {
            let (_, root, registry) = fixture_context(args, cli)?;
            run_generate(generate, &root, &registry)
        }
        FixturesAction::Validate(validate) => {
            let (_, root, _) = fixture_context(args, cli)?;
            run_validate(validate, &root)
        }
        FixturesAction::Calibrate(calibrate) => {
            let (_, root, registry) = fixture_context(args, cli)?;
            run_calibrate(calibrate, &root, &registry)
        }
        FixturesAction::Verify(verify) => {
            let (config, root, registry) = fixture_context(args, cli)?;
            run_verify(verify, cli, &config, &root, &registry)
        }
    }
}

/// Config, fixture root and registry for every action except `perf`, which
/// only reads the files it is given.
fn fixture_context(
    args: &FixturesArgs,
    cli: &Cli,
) -> Result<(Config, PathBuf, LanguageRegistry)> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let root = fixture_root(args.dir.as_deref(), &config);
    let registry = build_registry(&config);
    tracing::debug!(root = %root.display(), "fixture root");
    Ok((config, root, registry))
}

fn run_generate(args: &GenerateArgs, root: &Path, registry: &LanguageRegistry) -> Result<i32> {
    let generator = FixtureGenerator::new(root, registry);

    if let Some(name) = &args.language {
        if generator.generate_named(name, args.force)? {
            println!("Generated fixtures for {name} in {}", root.display());
        } else {
            println!("Fixtures for {name} already exist. Use --force to overwrite.");
        }
    } else if let Some(category) = args.category {
        let count = generator.generate_category(category, args.force)?;
        println!("Generated fixtures for {count} {category} languages in {}", root.display());
    } else {
        let count = generator.generate_all(args.force)?;
        println!("Generated fixtures for {count} languages in {}", root.display());
    }
    Ok(EXIT_SUCCESS)
}

fn run_validate(args: &ValidateArgs, root: &Path) -> Result<i32> {
    let suite = ValidatorSuite::default();
    let mut report = if args.validators.is_empty() {
        suite.validate(root)
    } else {
        suite.validate_specific(root, &args.validators)
    };
    if args.strict {
        report.promote_warnings();
    }

    let content = if args.json {
        let mut json = report.to_json()?;
        json.push('\n');
        json
    } else {
        report.summary()
    };
    write_output(args.output.as_deref(), &content)?;

    Ok(if report.has_errors() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    })
}

fn run_calibrate(args: &CalibrateArgs, root: &Path, registry: &LanguageRegistry) -> Result<i32> {
    let counter = RegistryLineCounter::new(registry);
    let calibrator = Calibrator::new(&counter);

    let outcomes = if let Some(name) = &args.language {
        let dir = find_language_dir(root, name).ok_or_else(|| NxlcError::Fixture {
            path: root.to_path_buf(),
            message: format!("no fixtures for language '{name}'"),
        })?;
        vec![calibrator.calibrate_language(&dir, args.dry_run)?]
    } else if let Some(category) = args.category {
        calibrator.calibrate_category(&root.join(category.as_str()), args.dry_run)?
    } else {
        calibrator.calibrate_all(root, args.dry_run)?
    };

    print!("{}", format_calibration(&outcomes, args.dry_run));
    Ok(EXIT_SUCCESS)
}

/// One block per changed language, then a one-line summary.
#[must_use]
pub fn format_calibration(outcomes: &[CalibrationOutcome], dry_run: bool) -> String {
    let mut out = String::new();
    for outcome in outcomes.iter().filter(|o| o.changed()) {
        writeln!(out, "{}:", outcome.language).ok();
        for change in &outcome.changes {
            writeln!(out, "  {}: {} -> {}", change.kind, change.old, change.new).ok();
        }
    }

    let changed = outcomes.iter().filter(|o| o.changed()).count();
    if dry_run {
        writeln!(
            out,
            "{changed} of {} languages would change (dry run, nothing written)",
            outcomes.len()
        )
        .ok();
    } else {
        writeln!(out, "Calibrated {changed} of {} languages", outcomes.len()).ok();
    }
    out
}

/// Keeps fixtures whose language and category match the filters, ignoring case.
#[must_use]
pub fn select_fixtures(
    fixtures: Vec<Fixture>,
    language: Option<&str>,
    category: Option<&str>,
) -> Vec<Fixture> {
    fixtures
        .into_iter()
        .filter(|f| language.is_none_or(|l| f.language.eq_ignore_ascii_case(l)))
        .filter(|f| category.is_none_or(|c| f.category.eq_ignore_ascii_case(c)))
        .collect()
}

fn run_verify(
    args: &VerifyArgs,
    cli: &Cli,
    config: &Config,
    root: &Path,
    registry: &LanguageRegistry,
) -> Result<i32> {
    let fixtures = select_fixtures(
        load_all(root)?,
        args.language.as_deref(),
        args.category.map(Category::as_str),
    );
    if fixtures.is_empty() {
        return Err(NxlcError::Fixture {
            path: root.to_path_buf(),
            message: "no fixtures match the given filters".to_string(),
        });
    }

    let counter = RegistryLineCounter::new(registry);
    let strategies = StrategyRegistry::from_config(&config.fixtures);
    let executor = Executor::new(&counter, &strategies)
        .with_workers(args.workers.unwrap_or(config.fixtures.workers))
        .parallel(!args.sequential);

    let progress = ScanProgress::with_label(fixtures.len() as u64, cli.quiet, "Verifying");
    let results = executor.execute_all(&fixtures, |_, _, _| progress.inc())?;
    progress.finish();

    let reporter = Reporter::new(root);
    print!("{}", reporter.detailed_report(&results));
    if let Some(path) = &args.report {
        reporter.save_json_report(&results, path)?;
        tracing::info!(path = %path.display(), "saved JSON report");
    }

    Ok(if Reporter::summary(&results).all_passed() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    })
}

fn run_perf(args: &PerfArgs, cli: &Cli) -> Result<i32> {
    let checker = PerformanceChecker::new(&args.baseline, &args.results);

    if args.update_baseline {
        checker.update_baseline()?;
        println!("Baseline updated: {}", args.baseline.display());
        return Ok(EXIT_SUCCESS);
    }

    let check = checker.check(args.threshold)?;
    if !cli.quiet || check.has_regression() {
        print!("{}", PerformanceChecker::report(&check, cli.verbose > 0));
    }

    if check.has_regression() {
        tracing::error!("performance regressions detected");
        Ok(EXIT_FAILURE)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

#[cfg(test)]
#[path = "fixtures_tests.rs"]
mod tests;
