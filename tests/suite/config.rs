//! Config discovery through the environment

use std::fs;

use udigit_config::{CONFIG_ENV_VAR, UdigitConfig};
use udigit_types::{BitWidth, Radix, map_digits, resolve_anchor};

#[test]
fn env_var_selects_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("udigit.toml");
    fs::write(&path, "[map]\nanchor = \"bengali\"\n\n[parse]\nbits = 8\n").unwrap();

    unsafe {
        std::env::set_var(CONFIG_ENV_VAR, &path);
    }
    let resolved = UdigitConfig::path();
    let loaded = UdigitConfig::load();
    unsafe {
        std::env::remove_var(CONFIG_ENV_VAR);
    }

    assert_eq!(resolved.as_deref(), Some(path.as_path()));
    let config = loaded.unwrap().unwrap();
    assert_eq!(config.radix(), Radix::DECIMAL);
    assert_eq!(config.bit_width(), BitWidth::Bits8);

    let anchor = resolve_anchor(config.anchor().unwrap()).unwrap();
    assert_eq!(map_digits("2024", anchor), "২০২৪");
}
