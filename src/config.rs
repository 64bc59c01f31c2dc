use crate::settings::Settings;
use eyre::Result;
use std::{fs, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    filepath: PathBuf,
}

impl Config {
    pub fn new() -> Result<Self> {
        let prefix = get_app_data_prefix()?;
        let filepath = prefix.join("configuration.json");
        Self::load_from(filepath)
    }

    /// Load from an explicit path (`--config FILE`). A missing file is not
    /// an error; the defaults apply and a later `save` creates it.
    pub fn load_from(filepath: PathBuf) -> Result<Self> {
        let mut settings = Settings::default();

        if filepath.exists() {
            let config_str = fs::read_to_string(&filepath)?;
            if let Ok(user_config) = serde_json::from_str::<serde_json::Value>(&config_str) {
                if let Some(user_settings_map) =
                    user_config.get("Setting").and_then(|v| v.as_object())
                {
                    if let Some(val) = user_settings_map
                        .get("wide_breakpoint")
                        .and_then(|v| v.as_f64())
                    {
                        settings.wide_breakpoint = val as f32;
                    }
                    if let Some(val) = user_settings_map
                        .get("narrow_breakpoint")
                        .and_then(|v| v.as_f64())
                    {
                        settings.narrow_breakpoint = val as f32;
                    }
                    if let Some(val) = user_settings_map
                        .get("single_page_max_width")
                        .and_then(|v| v.as_f64())
                    {
                        settings.single_page_max_width = val as f32;
                    }
                    if let Some(val) = user_settings_map
                        .get("double_page_max_width")
                        .and_then(|v| v.as_f64())
                    {
                        settings.double_page_max_width = val as f32;
                    }
                    if let Some(val) = user_settings_map
                        .get("page_gutter")
                        .and_then(|v| v.as_f64())
                    {
                        settings.page_gutter = val as f32;
                    }
                    if let Some(val) = user_settings_map
                        .get("container_inset")
                        .and_then(|v| v.as_f64())
                    {
                        settings.container_inset = val as f32;
                    }
                    if let Some(val) = user_settings_map
                        .get("cell_width_px")
                        .and_then(|v| v.as_f64())
                    {
                        settings.cell_width_px = val as f32;
                    }
                    if let Some(val) = user_settings_map
                        .get("start_in_double_mode")
                        .and_then(|v| v.as_bool())
                    {
                        settings.start_in_double_mode = val;
                    }
                    if let Some(val) = user_settings_map
                        .get("show_key_hints")
                        .and_then(|v| v.as_bool())
                    {
                        settings.show_key_hints = val;
                    }
                }
            }
        }

        Ok(Self { settings, filepath })
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<()> {
        let config_json = serde_json::json!({
            "Setting": self.settings,
        });

        let config_str = serde_json::to_string_pretty(&config_json)?;

        // Ensure directory exists before writing
        if let Some(parent) = self.filepath.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.filepath, config_str)?;
        Ok(())
    }
}

pub fn get_app_data_prefix() -> Result<PathBuf> {
    if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(config_home).join("folio");
        return Ok(path);
    } else if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config").join("folio");
        return Ok(path);
    }
    Err(eyre::eyre!(
        "could not determine configuration directory: neither XDG_CONFIG_HOME nor HOME is set"
    ))
}
