#![allow(clippy::unwrap_used)]

// Every test that loads goes through `Jail`: it serializes access to the
// process environment and restores it afterwards.

use std::path::Path;

use fabric_config::{Config, ConfigError, Links, load_config, load_config_from, save_config_to};
use fabric_core::{ConnectedRouters, ModelMapper, RequestContext, Router};
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn missing_file_yields_defaults() {
    Jail::expect_with(|_jail| {
        let cfg = load_config_from(Path::new("absent.toml")).map_err(|e| e.to_string())?;
        assert_eq!(cfg, Config::default());
        Ok(())
    });
}

#[test]
fn base_url_read_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            "[links]\nbase_url = \"https://ctrl.example:1280/edge/management/v1\"\n",
        )?;

        let cfg = load_config_from(Path::new("config.toml")).map_err(|e| e.to_string())?;
        let links = cfg.link_config().map_err(|e| e.to_string())?;

        assert_eq!(
            links.base_url().unwrap().as_str(),
            "https://ctrl.example:1280/edge/management/v1/"
        );
        Ok(())
    });
}

#[test]
fn env_overrides_toml_base_url() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            "[links]\nbase_url = \"https://file.example/api\"\n",
        )?;
        jail.set_env("FABRIC_LINKS__BASE_URL", "https://env.example/edge/v1");

        let cfg = load_config_from(Path::new("config.toml")).map_err(|e| e.to_string())?;
        assert_eq!(
            cfg.links.base_url.as_deref(),
            Some("https://env.example/edge/v1")
        );

        let links = cfg.link_config().map_err(|e| e.to_string())?;
        assert_eq!(
            links.base_url().unwrap().as_str(),
            "https://env.example/edge/v1/"
        );
        Ok(())
    });
}

#[test]
fn env_alone_switches_to_absolute_links() {
    Jail::expect_with(|jail| {
        jail.set_env("FABRIC_LINKS__BASE_URL", "https://env.example/");

        let cfg = load_config_from(Path::new("absent.toml")).map_err(|e| e.to_string())?;
        let mapper = cfg.router_mapper().map_err(|e| e.to_string())?;
        let router = Router {
            id: "r-2".into(),
            ..Router::default()
        };
        let detail = mapper
            .to_api(&ConnectedRouters::new(), &RequestContext::new(), &router)
            .map_err(|e| e.to_string())?;

        assert_eq!(
            detail.base.links["terminators"].href,
            "https://env.example/routers/r-2/terminators"
        );
        Ok(())
    });
}

#[cfg(target_os = "linux")]
#[test]
fn load_config_reads_platform_path() {
    Jail::expect_with(|jail| {
        let root = jail.directory().to_path_buf();
        std::fs::create_dir_all(root.join("fabric")).map_err(|e| e.to_string())?;
        jail.create_file(
            "fabric/config.toml",
            "[links]\nbase_url = \"https://xdg.example/\"\n",
        )?;
        jail.set_env("XDG_CONFIG_HOME", root.display());

        let cfg = load_config().map_err(|e| e.to_string())?;
        assert_eq!(cfg.links.base_url.as_deref(), Some("https://xdg.example/"));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[links\nbase_url = 3")?;

        assert!(matches!(
            load_config_from(Path::new("config.toml")),
            Err(ConfigError::Figment(_))
        ));
        Ok(())
    });
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let cfg = Config {
        links: Links {
            base_url: Some("https://ctrl.example/api/".into()),
        },
    };

    save_config_to(&cfg, &path).unwrap();

    Jail::expect_with(|_jail| {
        assert_eq!(load_config_from(&path).map_err(|e| e.to_string())?, cfg);
        Ok(())
    });
}

#[test]
fn configured_mapper_emits_absolute_links() {
    let cfg = Config {
        links: Links {
            base_url: Some("https://ctrl.example/edge/management/v1".into()),
        },
    };
    let mapper = cfg.router_mapper().unwrap();
    let router = Router {
        id: "r-5".into(),
        ..Router::default()
    };

    let detail = mapper
        .to_api(&ConnectedRouters::new(), &RequestContext::new(), &router)
        .unwrap();

    assert_eq!(
        detail.base.links["self"].href,
        "https://ctrl.example/edge/management/v1/routers/r-5"
    );
}
