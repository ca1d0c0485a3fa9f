use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};

/// Widget manifest schema loaded from `widget.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WidgetManifest {
    pub id: String,
    pub name: String,
    pub version: String,
    pub compatibility: WidgetCompatibility,
    pub assets: WidgetAssets,
}

/// Compatibility constraints for host API negotiation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WidgetCompatibility {
    pub host_api: String,
}

/// Assets packaged into the widget bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WidgetAssets {
    pub images: Vec<String>,
}

/// The manifest compiled into the widget bundle.
const BUNDLED_MANIFEST: &str = include_str!("../widget.toml");

impl WidgetManifest {
    /// Parse and validate manifest TOML.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let manifest: Self =
            toml::from_str(input).context("failed to parse widget manifest TOML")?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load and validate a manifest from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read widget manifest at {}", path.display()))?;

        Self::from_toml_str(&raw)
            .with_context(|| format!("invalid widget manifest at {}", path.display()))
    }

    /// The default manifest embedded at build time, listing the bundled
    /// image catalog.
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_MANIFEST).context("embedded widget.toml is invalid")
    }

    /// Validate required fields and semantic constraints.
    pub fn validate(&self) -> Result<()> {
        validate_nonempty("id", &self.id)?;
        validate_nonempty("name", &self.name)?;
        validate_nonempty("version", &self.version)?;
        validate_nonempty("compatibility.host_api", &self.compatibility.host_api)?;
        validate_image_list(&self.assets.images)?;

        Version::parse(&self.version)
            .with_context(|| format!("manifest version must be valid semver: {}", self.version))?;
        VersionReq::parse(&self.compatibility.host_api).with_context(|| {
            format!(
                "compatibility.host_api must be a valid semver requirement: {}",
                self.compatibility.host_api
            )
        })?;

        Ok(())
    }

    /// Ensure this widget supports the provided host API version.
    pub fn supports_host_api(&self, host_api_version: &str) -> Result<()> {
        let requirement = VersionReq::parse(&self.compatibility.host_api).with_context(|| {
            format!(
                "compatibility.host_api must be a valid semver requirement: {}",
                self.compatibility.host_api
            )
        })?;
        let host = Version::parse(host_api_version).with_context(|| {
            format!("host API version must be valid semver: {host_api_version}")
        })?;

        if requirement.matches(&host) {
            Ok(())
        } else {
            bail!(
                "widget requires host_api {} but host is {}",
                self.compatibility.host_api,
                host
            )
        }
    }
}

fn validate_nonempty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("{field} must not be empty")
    }
    Ok(())
}

fn validate_image_list(images: &[String]) -> Result<()> {
    if images.is_empty() {
        bail!("assets.images must list at least one image");
    }

    let mut seen = BTreeSet::new();
    for image in images {
        if image.trim().is_empty() {
            bail!("assets.images entries must not be empty");
        }
        if image.trim() != image {
            bail!(
                "assets.images entry {:?} has leading/trailing whitespace",
                image
            );
        }
        if !seen.insert(image.as_str()) {
            bail!("assets.images contains duplicate entry {:?}", image);
        }
    }

    Ok(())
}
