use std::path::Path;

use colored::Colorize;

use crate::config::AppConfig;
use crate::errors::{LocatorError, Result};

/// Default output file for `config generate`
pub const SAMPLE_CONFIG_FILE: &str = "iplocator.example.toml";

/// 生成示例配置文件
///
/// 文件已存在时需要 `--force` 才会覆盖。
pub fn config_generate(output_path: Option<String>, force: bool) -> Result<()> {
    let path = output_path.unwrap_or_else(|| SAMPLE_CONFIG_FILE.to_string());

    if !force && Path::new(&path).exists() {
        return Err(LocatorError::validation(format!(
            "File already exists: {} (use --force to overwrite)",
            path
        )));
    }

    AppConfig::default().save_to_file(&path)?;
    println!(
        "{} {}",
        "Configuration file generated:".green(),
        path.blue()
    );
    println!(
        "  {}",
        "Rename it to iplocator.toml or pass it with -c/--config".dimmed()
    );
    Ok(())
}

/// 打印当前生效的配置
pub fn config_show(config: &AppConfig) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    println!("{}", content);
    Ok(())
}
