use crate::dto::diff::RevisionComparison;
use crate::ports::revision_source::RevisionSource;
use crate::services::diff::assemble::diff_documents;

pub struct CompareRevisions<'a, S>
where
    S: RevisionSource + ?Sized,
{
    pub source: &'a S,
}

impl<'a, S> CompareRevisions<'a, S>
where
    S: RevisionSource + ?Sized,
{
    pub async fn execute(
        &self,
        base_revision: &str,
        target_revision: &str,
    ) -> anyhow::Result<Option<RevisionComparison>> {
        let Some(old) = self.source.load_revision(base_revision).await? else {
            return Ok(None);
        };
        let Some(new) = self.source.load_revision(target_revision).await? else {
            return Ok(None);
        };
        Ok(Some(diff_documents(&old, &new)))
    }
}
