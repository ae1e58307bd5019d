//! Repository and webhook lists of the settings screen
//!
//! Session state only; nothing here is persisted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name given to a repository whose URL has no last path segment
const FALLBACK_REPO_NAME: &str = "new-repo";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub url: String,
    pub connected: bool,
}

impl Repository {
    /// New, disconnected repository named after the last segment of `url`
    pub fn from_url(url: &str) -> Self {
        let name = url
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or(FALLBACK_REPO_NAME);

        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            url: url.to_string(),
            connected: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookEvent {
    Push,
    Merge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookConfig {
    pub id: String,
    pub name: String,
    pub url: String,
    pub enabled: bool,
    pub events: Vec<WebhookEvent>,
}

/// Repositories and webhooks configured in this session
#[derive(Debug, Clone)]
pub struct IntegrationsState {
    repositories: Vec<Repository>,
    webhooks: Vec<WebhookConfig>,
}

impl Default for IntegrationsState {
    fn default() -> Self {
        Self {
            repositories: vec![
                Repository {
                    id: "1".to_string(),
                    name: "lovable-project".to_string(),
                    url: "https://github.com/user/lovable-project".to_string(),
                    connected: true,
                },
                Repository {
                    id: "2".to_string(),
                    name: "antigravity-sync".to_string(),
                    url: "https://github.com/user/antigravity-sync".to_string(),
                    connected: false,
                },
            ],
            webhooks: vec![
                WebhookConfig {
                    id: "1".to_string(),
                    name: "Deploy Hook".to_string(),
                    url: "https://api.example.com/deploy".to_string(),
                    enabled: true,
                    events: vec![WebhookEvent::Push, WebhookEvent::Merge],
                },
                WebhookConfig {
                    id: "2".to_string(),
                    name: "Notification".to_string(),
                    url: "https://api.example.com/notify".to_string(),
                    enabled: false,
                    events: vec![WebhookEvent::Push],
                },
            ],
        }
    }
}

impl IntegrationsState {
    /// Empty lists, without the seeded examples
    #[cfg(test)]
    fn empty() -> Self {
        Self {
            repositories: Vec::new(),
            webhooks: Vec::new(),
        }
    }

    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    pub fn webhooks(&self) -> &[WebhookConfig] {
        &self.webhooks
    }

    pub fn repository(&self, id: &str) -> Option<&Repository> {
        self.repositories.iter().find(|r| r.id == id)
    }

    /// Add a repository by URL; blank input is ignored
    pub fn add_repository(&mut self, url: &str) -> Option<Repository> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }

        let repo = Repository::from_url(url);
        tracing::debug!(name = %repo.name, "Added repository");
        self.repositories.push(repo.clone());
        Some(repo)
    }

    /// Flip the connected flag; `false` if the id is unknown
    pub fn toggle_repository(&mut self, id: &str) -> bool {
        match self.repositories.iter_mut().find(|r| r.id == id) {
            Some(repo) => {
                repo.connected = !repo.connected;
                true
            }
            None => false,
        }
    }

    pub fn remove_repository(&mut self, id: &str) -> bool {
        let before = self.repositories.len();
        self.repositories.retain(|r| r.id != id);
        self.repositories.len() != before
    }

    /// Add an enabled webhook listening to pushes; ignored unless both fields are filled
    pub fn add_webhook(&mut self, name: &str, url: &str) -> Option<WebhookConfig> {
        let (name, url) = (name.trim(), url.trim());
        if name.is_empty() || url.is_empty() {
            return None;
        }

        let webhook = WebhookConfig {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            url: url.to_string(),
            enabled: true,
            events: vec![WebhookEvent::Push],
        };
        tracing::debug!(name = %webhook.name, "Added webhook");
        self.webhooks.push(webhook.clone());
        Some(webhook)
    }

    pub fn toggle_webhook(&mut self, id: &str) -> bool {
        match self.webhooks.iter_mut().find(|w| w.id == id) {
            Some(webhook) => {
                webhook.enabled = !webhook.enabled;
                true
            }
            None => false,
        }
    }

    pub fn remove_webhook(&mut self, id: &str) -> bool {
        let before = self.webhooks.len();
        self.webhooks.retain(|w| w.id != id);
        self.webhooks.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_lists() {
        let state = IntegrationsState::default();
        assert_eq!(state.repositories().len(), 2);
        assert_eq!(state.webhooks().len(), 2);
        assert!(state.repository("1").unwrap().connected);
    }

    #[test]
    fn test_add_repository_names_after_last_segment() {
        let mut state = IntegrationsState::empty();
        let repo = state
            .add_repository("  https://github.com/user/my-app ")
            .unwrap();

        assert_eq!(repo.name, "my-app");
        assert_eq!(repo.url, "https://github.com/user/my-app");
        assert!(!repo.connected);
        assert_eq!(state.repositories(), &[repo]);
    }

    #[test]
    fn test_add_repository_trailing_slash_gets_fallback_name() {
        let mut state = IntegrationsState::empty();
        let repo = state.add_repository("https://github.com/user/").unwrap();
        assert_eq!(repo.name, "new-repo");
    }

    #[test]
    fn test_add_repository_without_slash() {
        let mut state = IntegrationsState::empty();
        assert_eq!(state.add_repository("solo").unwrap().name, "solo");
    }

    #[test]
    fn test_blank_repository_ignored() {
        let mut state = IntegrationsState::empty();
        assert!(state.add_repository("   ").is_none());
        assert!(state.repositories().is_empty());
    }

    #[test]
    fn test_new_ids_are_unique() {
        let mut state = IntegrationsState::empty();
        let a = state.add_repository("https://github.com/user/a").unwrap();
        let b = state.add_repository("https://github.com/user/a").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_toggle_and_remove_repository() {
        let mut state = IntegrationsState::default();
        assert!(state.toggle_repository("2"));
        assert!(state.repository("2").unwrap().connected);
        assert!(state.toggle_repository("2"));
        assert!(!state.repository("2").unwrap().connected);

        assert!(state.remove_repository("1"));
        assert!(state.repository("1").is_none());
        assert!(!state.remove_repository("1"));
        assert!(!state.toggle_repository("missing"));
    }

    #[test]
    fn test_add_webhook_requires_name_and_url() {
        let mut state = IntegrationsState::empty();
        assert!(state.add_webhook("", "https://hooks.example.com").is_none());
        assert!(state.add_webhook("Deploy", "  ").is_none());

        let hook = state.add_webhook("Deploy", "https://hooks.example.com").unwrap();
        assert!(hook.enabled);
        assert_eq!(hook.events, vec![WebhookEvent::Push]);
        assert_eq!(state.webhooks().len(), 1);
    }

    #[test]
    fn test_toggle_and_remove_webhook() {
        let mut state = IntegrationsState::default();
        assert!(state.toggle_webhook("2"));
        assert!(state.webhooks()[1].enabled);

        assert!(state.remove_webhook("1"));
        assert_eq!(state.webhooks().len(), 1);
        assert!(!state.toggle_webhook("1"));
    }

    #[test]
    fn test_webhook_serialization() {
        let state = IntegrationsState::default();
        let value = serde_json::to_value(&state.webhooks()[0]).unwrap();
        assert_eq!(value["events"], serde_json::json!(["push", "merge"]));
    }
}
