// src/commands/convert.rs

use anyhow::{Context, Result};
use colored::*;
use std::{fs, path::PathBuf};

use crate::{
    core::{
        catalog::Catalog,
        config::ConversionConfig,
        models::ConversionSummary,
        rewrite::Rewriter,
    },
    infra,
    reporting::console::print_summary,
    t,
};

pub fn execute(config: PathBuf, project_dir: PathBuf) -> Result<()> {
    let (config, config_path) = setup_and_parse_config(&config)?;
    let locale = config.language.clone();
    rust_i18n::set_locale(&locale);

    let project_root = fs::canonicalize(&project_dir)
        .with_context(|| t!("project_dir_not_found", locale = &locale, path = project_dir.display()).to_string())?;

    println!(
        "{}",
        t!("project_root_detected", locale = &locale, path = project_root.display())
    );
    println!(
        "{}",
        t!("loading_config", locale = &locale, path = config_path.display())
    );

    let chinese_path = infra::fs::resolve_path(&config.catalogs.chinese, &project_root);
    let english_path = infra::fs::resolve_path(&config.catalogs.english, &project_root);

    println!("{}", t!("parsing_chinese_catalog", locale = &locale));
    let chinese = Catalog::load(&chinese_path)?;
    println!(
        "{}",
        t!("found_chinese_translations", locale = &locale, count = chinese.len()).cyan()
    );

    println!("{}", t!("parsing_english_catalog", locale = &locale));
    let english = Catalog::load(&english_path)?;
    println!(
        "{}",
        t!("found_english_translations", locale = &locale, count = english.len()).cyan()
    );

    let rewriter = Rewriter::new(&chinese, &english, &config.macros)?;

    let mut summary = ConversionSummary {
        chinese_entries: chinese.len(),
        english_entries: english.len(),
        files: Vec::new(),
    };

    if config.targets.is_empty() {
        println!("{}", t!("no_targets_configured", locale = &locale).yellow());
    }

    for target in &config.targets {
        let target_path = infra::fs::resolve_path(&target.path, &project_root);

        println!(
            "{}",
            t!("converting_file", locale = &locale, path = target_path.display())
        );

        let content = infra::fs::read_file(&target_path)?;
        let (rewritten, replacements) = rewriter.rewrite(&content);
        // The full content is written back even when nothing matched.
        infra::fs::write_file(&target_path, &rewritten)?;

        println!(
            "{}",
            t!(
                "converted_file",
                locale = &locale,
                path = target_path.display(),
                count = replacements
            )
        );

        summary.record(target.path.clone(), replacements);
    }

    print_summary(&summary, &locale);

    println!("\n{}", t!("done", locale = &locale).green().bold());
    Ok(())
}

fn setup_and_parse_config(config_path_arg: &PathBuf) -> Result<(ConversionConfig, PathBuf)> {
    // For config parsing, we don't have the locale yet. Use English as a default.
    let locale = "en";
    let config_path = fs::canonicalize(config_path_arg)
        .with_context(|| t!("config_read_failed_path", locale = locale, path = config_path_arg.display()).to_string())?;

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| t!("config_read_failed_path", locale = locale, path = config_path.display()).to_string())?;

    let config: ConversionConfig =
        toml::from_str(&config_content).with_context(|| t!("config_parse_failed", locale = locale).to_string())?;

    Ok((config, config_path))
}
