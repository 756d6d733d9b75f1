// src/application/commands/articles/edit_access.rs
use super::{ArticleCommandService, ArticleRef, capability::rejected};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult, ports::identity::IdentityProvider},
    domain::article::{EditAccessCommand, EditDecision},
};

pub struct RespondToEditRequestCommand {
    pub target: ArticleRef,
    pub decision: EditDecision,
}

impl ArticleCommandService {
    pub async fn request_edit_access(
        &self,
        identity: &dyn IdentityProvider,
        target: ArticleRef,
    ) -> ApplicationResult<ArticleDto> {
        self.negotiate(identity, target, EditAccessCommand::Request)
            .await
    }

    pub async fn respond_to_edit_request(
        &self,
        identity: &dyn IdentityProvider,
        command: RespondToEditRequestCommand,
    ) -> ApplicationResult<ArticleDto> {
        self.negotiate(
            identity,
            command.target,
            EditAccessCommand::Respond(command.decision),
        )
        .await
    }

    pub async fn cancel_edit_request(
        &self,
        identity: &dyn IdentityProvider,
        target: ArticleRef,
    ) -> ApplicationResult<ArticleDto> {
        self.negotiate(identity, target, EditAccessCommand::Cancel)
            .await
    }

    /// Releases an approved grant and returns the article to normal moderation.
    pub async fn revert_edit_approval(
        &self,
        identity: &dyn IdentityProvider,
        target: ArticleRef,
    ) -> ApplicationResult<ArticleDto> {
        self.negotiate(identity, target, EditAccessCommand::Revert)
            .await
    }

    async fn negotiate(
        &self,
        identity: &dyn IdentityProvider,
        target: ArticleRef,
        command: EditAccessCommand,
    ) -> ApplicationResult<ArticleDto> {
        let actor = identity.current_actor()?;
        let article = self.load(target).await?;
        let action = command.action();
        let grant = self.authorize(action, &actor, &article)?;

        let transition = self
            .negotiator
            .apply(&article, &grant, command, self.clock.now())
            .map_err(|err| rejected(action, &actor, &article, err))?;

        self.commit(article.version, transition).await
    }
}
