// src/application/commands/articles/delete.rs
use super::{ArticleCommandService, ArticleRef, capability::rejected};
use crate::{
    application::{error::ApplicationResult, ports::identity::IdentityProvider},
    domain::article::{ArticleAction, ArticleEvent},
};

pub struct DeleteArticleCommand {
    pub target: ArticleRef,
}

impl ArticleCommandService {
    /// Out-of-band removal, gated like any other command but not a workflow
    /// transition.
    pub async fn delete_article(
        &self,
        identity: &dyn IdentityProvider,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let actor = identity.current_actor()?;
        let article = self.load(command.target).await?;
        let grant = self.authorize(ArticleAction::Delete, &actor, &article)?;
        self.engine
            .ensure_deletable(&article, &grant)
            .map_err(|err| rejected(ArticleAction::Delete, &actor, &article, err))?;

        self.write_repo.delete(article.id, article.version).await?;
        ArticleEvent::Deleted {
            id: article.id,
            actor,
            at: self.clock.now(),
        }
        .record();
        Ok(())
    }
}
