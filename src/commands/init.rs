//! # Conversion Config Initialization Module / 转换配置初始化模块
//!
//! This module provides functionality for initializing a new conversion
//! configuration through an interactive command-line wizard. It helps users
//! create a `Localize.toml` file with the conventional catalog layout and
//! macro pair.
//!
//! 此模块通过交互式命令行向导提供初始化新转换配置的功能。
//! 它帮助用户创建带有常规目录布局和宏对的 `Localize.toml` 文件。
//!
//! ## Features / 功能特性
//!
//! - **Interactive Wizard**: Step-by-step guidance for configuration setup
//! - **Conventional Defaults**: Catalog paths derived from the localization namespace
//! - **Overwrite Protection**: Confirmation prompts before overwriting existing configurations
//!
//! - **交互式向导**: 配置设置的逐步指导
//! - **常规默认值**: 根据本地化命名空间派生的目录路径
//! - **覆盖保护**: 覆盖现有配置前的确认提示

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::fs;
use std::path::Path;

use crate::core::config::{CatalogPaths, ConversionConfig, MacroNames, TargetFile};
use crate::t;

/// Runs the interactive wizard to generate a `Localize.toml` file.
///
/// This function provides a step-by-step guided process for creating a new
/// conversion configuration, deriving catalog paths from the localization
/// namespace the way engine projects conventionally lay them out.
///
/// 运行交互式向导以生成 `Localize.toml` 文件。
///
/// 此函数提供逐步指导过程，用于创建新的转换配置，
/// 按引擎项目的常规布局从本地化命名空间派生目录路径。
pub fn run_init_wizard(language: &str, non_interactive: bool) -> Result<()> {
    let config_path = Path::new("Localize.toml");
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!("\n{}", t!("init_wizard_welcome", locale = language).cyan().bold());
        println!("{}", t!("init_wizard_description", locale = language));
    }

    if config_path.exists() && !non_interactive {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init_overwrite_prompt", locale = language, path = config_path.to_str().unwrap()).to_string())
            .default(false)
            .interact()
            .context(t!("init_user_confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init_aborted", locale = language));
            return Ok(());
        }
    }

    if non_interactive {
        let config = generate_default_config(language);
        return write_config(config_path, &config, language);
    }

    // Interactive part starts here
    let namespace: String = Input::with_theme(&theme)
        .with_prompt(t!("init_namespace_prompt", locale = language).to_string())
        .default("Game".to_string())
        .interact_text()?;

    let target: String = Input::with_theme(&theme)
        .with_prompt(t!("init_target_prompt", locale = language).to_string())
        .default(format!("Source/{ns}/Private/UI/S{ns}Widget.cpp", ns = namespace))
        .interact_text()?;

    let source_macro: String = Input::with_theme(&theme)
        .with_prompt(t!("init_source_macro_prompt", locale = language).to_string())
        .default("LOCTEXT".to_string())
        .interact_text()?;

    let replacement_macro: String = Input::with_theme(&theme)
        .with_prompt(t!("init_replacement_macro_prompt", locale = language).to_string())
        .default(format!("BP_{}", source_macro))
        .interact_text()?;

    let config = ConversionConfig {
        language: language.to_string(),
        catalogs: catalog_paths_for(&namespace),
        targets: vec![TargetFile { path: target.into() }],
        macros: MacroNames {
            source: source_macro,
            replacement: replacement_macro,
        },
    };

    write_config(config_path, &config, language)
}

/// Derives the conventional catalog paths for a localization namespace:
/// `Content/Localization/<ns>/zh-Hans/<ns>.po` and `.../en/<ns>.po`.
///
/// 为本地化命名空间派生常规目录路径：
/// `Content/Localization/<ns>/zh-Hans/<ns>.po` 和 `.../en/<ns>.po`。
fn catalog_paths_for(namespace: &str) -> CatalogPaths {
    CatalogPaths {
        chinese: format!("Content/Localization/{ns}/zh-Hans/{ns}.po", ns = namespace).into(),
        english: format!("Content/Localization/{ns}/en/{ns}.po", ns = namespace).into(),
    }
}

fn generate_default_config(language: &str) -> ConversionConfig {
    ConversionConfig {
        language: language.to_string(),
        catalogs: catalog_paths_for("Game"),
        targets: vec![],
        macros: MacroNames::default(),
    }
}

fn write_config(path: &Path, config: &ConversionConfig, language: &str) -> Result<()> {
    let toml_string = toml::to_string_pretty(config)
        .context(t!("init_serialize_failed", locale = language).to_string())?;

    fs::write(path, toml_string)
        .with_context(|| t!("init_write_failed", locale = language, path = path.to_str().unwrap()))?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init_success_created", locale = language, path = path.to_str().unwrap()).bold()
    );
    println!("{}", t!("init_usage_hint", locale = language));

    Ok(())
}
