use async_trait::async_trait;

/// Access to stored document revisions. Retrieval (version history, HTTP,
/// filesystem) is owned by the host application; the engine only ever sees
/// the raw markdown strings.
#[async_trait]
pub trait RevisionSource: Send + Sync {
    async fn load_revision(&self, revision: &str) -> anyhow::Result<Option<String>>;
}
