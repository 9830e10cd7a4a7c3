//! Build script for medgreet-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates greeter.toml and embeds it as a `GreeterConfig` constant

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use medgreet_core::config::{ConfigError, GreeterConfig};

/// Top-level keys accepted in greeter.toml
const KNOWN_KEYS: &[&str] = &[
    "greeting_refresh_ms",
    "inactivity_timeout_ms",
    "tap_cooldown_ms",
    "poll_interval_ms",
    "touch",
];

/// Keys accepted in the [touch] table
const KNOWN_TOUCH_KEYS: &[&str] = &[
    "x_min", "x_max", "y_min", "y_max", "swap_xy", "invert_x", "invert_y",
];

fn main() {
    setup_linker();
    let config = load_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read, parse and validate greeter.toml
fn load_config() -> GreeterConfig {
    println!("cargo:rerun-if-changed=greeter.toml");

    let config_path = Path::new("greeter.toml");
    if !config_path.exists() {
        fail(
            "greeter.toml not found",
            &["The firmware embeds greeter.toml from the firmware directory."],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read greeter.toml", &[&e.to_string()]),
    };

    let value: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail("Invalid TOML syntax in greeter.toml", &[&e.to_string()]),
    };
    check_unknown_keys(&value);

    let config: GreeterConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail("Invalid value in greeter.toml", &[&e.to_string()]),
    };

    if let Err(e) = config.validate() {
        fail("Invalid configuration in greeter.toml", &[describe(e)]);
    }

    println!("cargo:warning=greeter.toml validated successfully");
    config
}

/// Reject misspelled keys, which serde would silently replace by defaults
fn check_unknown_keys(value: &toml::Value) {
    let mut errors = Vec::new();

    if let Some(table) = value.as_table() {
        for key in table.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                errors.push(format!("unknown key '{}'", key));
            }
        }
        match table.get("touch") {
            Some(toml::Value::Table(touch)) => {
                for key in touch.keys() {
                    if !KNOWN_TOUCH_KEYS.contains(&key.as_str()) {
                        errors.push(format!("unknown key 'touch.{}'", key));
                    }
                }
            }
            Some(_) => errors.push("[touch] must be a table".to_string()),
            None => {}
        }
    }

    if !errors.is_empty() {
        let lines: Vec<&str> = errors.iter().map(String::as_str).collect();
        fail("Unknown keys in greeter.toml", &lines);
    }
}

fn describe(e: ConfigError) -> &'static str {
    match e {
        ConfigError::ZeroGreetingRefresh => "greeting_refresh_ms must be greater than 0",
        ConfigError::TimeoutNotAfterRefresh => {
            "inactivity_timeout_ms must be greater than greeting_refresh_ms"
        }
        ConfigError::ZeroPollInterval => "poll_interval_ms must be greater than 0",
        ConfigError::EmptyTouchRange => "touch x_max/y_max must be greater than x_min/y_min",
    }
}

/// Write the validated configuration as Rust source
fn generate_config(config: &GreeterConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let touch = &config.touch;

    let source = format!(
        "/// Configuration embedded from greeter.toml\n\
         pub const GREETER_CONFIG: GreeterConfig = GreeterConfig {{\n\
         \x20   greeting_refresh_ms: {},\n\
         \x20   inactivity_timeout_ms: {},\n\
         \x20   tap_cooldown_ms: {},\n\
         \x20   poll_interval_ms: {},\n\
         \x20   touch: TouchCalibration {{\n\
         \x20       x_min: {},\n\
         \x20       x_max: {},\n\
         \x20       y_min: {},\n\
         \x20       y_max: {},\n\
         \x20       swap_xy: {},\n\
         \x20       invert_x: {},\n\
         \x20       invert_y: {},\n\
         \x20   }},\n\
         }};\n",
        config.greeting_refresh_ms,
        config.inactivity_timeout_ms,
        config.tap_cooldown_ms,
        config.poll_interval_ms,
        touch.x_min,
        touch.x_max,
        touch.y_min,
        touch.y_max,
        touch.swap_xy,
        touch.invert_x,
        touch.invert_y,
    );

    let mut f = File::create(out_dir.join("greeter_config.rs")).unwrap();
    f.write_all(source.as_bytes()).unwrap();
}

/// Abort the build with a boxed error message
fn fail(title: &str, details: &[&str]) -> ! {
    let body = details
        .iter()
        .flat_map(|d| d.lines())
        .map(|line| {
            let truncated = if line.chars().count() > 62 {
                format!("{}...", line.chars().take(59).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
