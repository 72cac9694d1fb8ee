use async_trait::async_trait;

/// Descriptor for one asset fetched during the first-launch download gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadItem {
    pub name: String,
    pub remote_url: String,
    pub file_name: String,
}

/// The asset set required before the runtime can initialize for the first
/// time on this install.
pub fn default_download_items() -> Vec<DownloadItem> {
    vec![
        DownloadItem {
            name: "language model weights".to_string(),
            remote_url: "https://assets.aster.app/models/chat-v1.bin".to_string(),
            file_name: "chat-v1.bin".to_string(),
        },
        DownloadItem {
            name: "tokenizer".to_string(),
            remote_url: "https://assets.aster.app/models/chat-v1.tokenizer.json".to_string(),
            file_name: "chat-v1.tokenizer.json".to_string(),
        },
        DownloadItem {
            name: "voice synthesis model".to_string(),
            remote_url: "https://assets.aster.app/models/voice-v1.bin".to_string(),
            file_name: "voice-v1.bin".to_string(),
        },
    ]
}

/// Download-progress collaborator seam.
///
/// Transfer mechanics and progress rendering live with the collaborator;
/// the orchestrator only consumes its single completion event via
/// `notify_download_complete`.
#[async_trait]
pub trait AssetDownloader: Send + Sync {
    async fn fetch(&self, items: &[DownloadItem]) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_items_are_uniquely_named() {
        let items = default_download_items();
        assert!(!items.is_empty());
        for (index, item) in items.iter().enumerate() {
            assert!(!item.file_name.is_empty());
            assert!(item.remote_url.starts_with("https://"));
            assert!(items[index + 1..]
                .iter()
                .all(|other| other.file_name != item.file_name));
        }
    }
}
