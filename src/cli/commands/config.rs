use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{migrate_missing_keys, missing_keys};
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check || *migrate {
            if !path.exists() {
                warning(format!(
                    "Configuration file {} not found. Run `pontocerto init` first.",
                    path.display()
                ));
                return Ok(());
            }

            if *check {
                let missing = missing_keys(&path)?;
                if missing.is_empty() {
                    success("Configuration file is up to date.");
                } else {
                    warning(format!("Missing keys: {}", missing.join(", ")));
                }
            }

            if *migrate {
                let added = migrate_missing_keys(&path)?;
                if added.is_empty() {
                    info("Nothing to migrate.");
                } else {
                    success(format!("Added keys: {}", added.join(", ")));
                }
            }
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor.as_deref())?;
            success(format!("Configuration file {} edited.", path.display()));
        }

        if !(*print_config || *check || *migrate || *edit_config) {
            if path.exists() {
                ConfigLogic::print(&path)?;
            } else {
                info("No configuration file, using defaults:\n");
                println!("{}", serde_yaml::to_string(cfg)?);
            }
        }
    }

    Ok(())
}
