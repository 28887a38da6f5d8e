//! QR code modal state

use linkstats_config::{QrConfig, QrSize};
use linkstats_shared::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};
use url::Url;

/// Anchor the host synthesizes to download the QR image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub href: String,
    pub file_name: String,
    pub target: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeModal {
    pub open: bool,
    pub url: String,
    pub qr_size: QrSize,
    pub qr_color: String,
}

impl QrCodeModal {
    pub fn new(initial_url: &str, config: &QrConfig) -> Self {
        Self {
            open: false,
            url: initial_url.to_string(),
            qr_size: config.default_size,
            qr_color: config.default_color.clone(),
        }
    }

    pub fn show_modal(&mut self, url: &str) {
        self.url = url.to_string();
        self.open = true;
    }

    /// Image URL for the current url, size and color
    pub fn qr_code_url(&self, service_url: &str) -> DashboardResult<String> {
        let mut image = Url::parse(service_url).map_err(|e| DashboardError::InvalidConfig {
            message: format!("QR service URL {service_url}: {e}"),
            field: Some("qr.serviceUrl".to_string()),
        })?;

        image
            .query_pairs_mut()
            .append_pair("size", &self.qr_size.dimensions())
            .append_pair("data", &self.url)
            .append_pair("color", &self.qr_color.replacen('#', "", 1));

        Ok(image.into())
    }

    /// `qrcode-<url>.png` with every non-alphanumeric character replaced by `-`
    pub fn download_file_name(&self) -> String {
        let slug: String = self
            .url
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        format!("qrcode-{slug}.png")
    }

    pub fn download_link(&self, service_url: &str) -> DashboardResult<DownloadLink> {
        Ok(DownloadLink {
            href: self.qr_code_url(service_url)?,
            file_name: self.download_file_name(),
            target: "_blank",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modal() -> QrCodeModal {
        QrCodeModal::new("https://sho.rt/abc", &QrConfig::default())
    }

    #[test]
    fn test_defaults() {
        let modal = modal();

        assert!(!modal.open);
        assert_eq!(modal.qr_size, QrSize::Medium);
        assert_eq!(modal.qr_color, "#000000");
    }

    #[test]
    fn test_qr_code_url() {
        let url = modal()
            .qr_code_url("https://api.qrserver.com/v1/create-qr-code/")
            .unwrap();

        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=https%3A%2F%2Fsho.rt%2Fabc&color=000000"
        );
    }

    #[test]
    fn test_size_and_color_follow_state() {
        let mut modal = modal();
        modal.qr_size = QrSize::Small;
        modal.qr_color = "#4f46e5".to_string();

        let url = modal.qr_code_url("https://qr.example/").unwrap();
        assert!(url.contains("size=150x150"));
        assert!(url.ends_with("color=4f46e5"));

        modal.qr_size = QrSize::Large;
        assert!(modal.qr_code_url("https://qr.example/").unwrap().contains("size=300x300"));
    }

    #[test]
    fn test_show_modal() {
        let mut modal = modal();
        modal.show_modal("https://sho.rt/xyz");

        assert!(modal.open);
        assert_eq!(modal.url, "https://sho.rt/xyz");
    }

    #[test]
    fn test_download_link() {
        let link = modal().download_link("https://qr.example/").unwrap();

        assert_eq!(link.file_name, "qrcode-https---sho-rt-abc.png");
        assert_eq!(link.target, "_blank");
        assert!(link.href.starts_with("https://qr.example/?size="));
    }

    #[test]
    fn test_invalid_service_url() {
        assert!(matches!(
            modal().qr_code_url("not a url"),
            Err(DashboardError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_alpine_state_names() {
        let state = serde_json::to_value(modal()).unwrap();

        assert_eq!(state["qrSize"], "medium");
        assert_eq!(state["qrColor"], "#000000");
        assert_eq!(state["open"], false);
    }
}
