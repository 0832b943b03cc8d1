use anyhow::{anyhow, Result};

mod raw;

const MAX_ZOOM: f64 = 19.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api: Api,
    pub map: Map,
}

impl Config {
    /// Load the configuration that is embedded into the application.
    pub fn load_default() -> Result<Self> {
        Self::try_from_toml(raw::DEFAULT_CONFIG_FILE)
    }

    /// Sections that are missing fall back to the embedded defaults.
    pub fn try_from_toml(cfg_string: &str) -> Result<Self> {
        let raw_config: raw::Config = toml::from_str(cfg_string)?;
        Self::try_from(raw_config)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Api {
    /// Self-IP discovery endpoint
    pub own_ip_url: String,
    /// Base URL of the geolocation lookup,
    /// the address is appended as path segment.
    pub lookup_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    pub zoom: f64,
    pub tile_layer_url: String,
    pub attribution: String,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { api, map } = from;

        let raw::Api {
            own_ip_url,
            lookup_url,
        } = api.unwrap_or_default();
        check_url("own-ip-url", &own_ip_url)?;
        check_url("lookup-url", &lookup_url)?;

        let raw::Map {
            zoom,
            tile_layer_url,
            attribution,
        } = map.unwrap_or_default();
        if !(0.0..=MAX_ZOOM).contains(&zoom) {
            return Err(anyhow!("Zoom level {zoom} is out of range 0..={MAX_ZOOM}"));
        }
        check_url("tile-layer-url", &tile_layer_url)?;

        Ok(Self {
            api: Api {
                own_ip_url,
                lookup_url,
            },
            map: Map {
                zoom,
                tile_layer_url,
                attribution,
            },
        })
    }
}

fn check_url(key: &str, url: &str) -> Result<()> {
    if ["http://", "https://", "/"]
        .iter()
        .any(|prefix| url.starts_with(prefix))
    {
        Ok(())
    } else {
        Err(anyhow!("Invalid {key}: {url:?}"))
    }
}
