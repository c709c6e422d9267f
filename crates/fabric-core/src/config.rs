// ── Link configuration ──
//
// Plain data handed to the link factories. Loading it from files or the
// environment lives in `fabric-config`.

use url::Url;

use crate::error::CoreError;

/// Where generated links point.
///
/// With no base URL every href is relative to the API root (`./routers/<id>`).
/// With a base URL hrefs are absolute, appended to it. The base always ends
/// in `/` and carries no query or fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkConfig {
    base_url: Option<Url>,
}

impl LinkConfig {
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Relative links.
    pub fn relative() -> Self {
        Self::default()
    }

    /// Absolute links under `raw`.
    ///
    /// A trailing `/` is added when missing so the last path segment of the
    /// base is kept when appending.
    pub fn from_base_url(raw: &str) -> Result<Self, CoreError> {
        let mut base = Url::parse(raw.trim()).map_err(|e| CoreError::Config {
            message: format!("invalid link base URL '{raw}': {e}"),
        })?;

        if base.cannot_be_a_base() {
            return Err(CoreError::Config {
                message: format!("link base URL '{raw}' cannot carry a path"),
            });
        }
        if base.query().is_some() || base.fragment().is_some() {
            return Err(CoreError::Config {
                message: format!("link base URL '{raw}' must not have a query or fragment"),
            });
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            base_url: Some(base),
        })
    }
}
