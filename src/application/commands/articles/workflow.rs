// src/application/commands/articles/workflow.rs
use super::{ArticleCommandService, ArticleRef, capability::rejected};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult, ports::identity::IdentityProvider},
    domain::article::WorkflowCommand,
};

pub struct RequestRevisionCommand {
    pub target: ArticleRef,
    pub feedback: String,
}

impl ArticleCommandService {
    pub async fn submit(
        &self,
        identity: &dyn IdentityProvider,
        target: ArticleRef,
    ) -> ApplicationResult<ArticleDto> {
        self.run_workflow(identity, target, WorkflowCommand::Submit)
            .await
    }

    pub async fn approve(
        &self,
        identity: &dyn IdentityProvider,
        target: ArticleRef,
    ) -> ApplicationResult<ArticleDto> {
        self.run_workflow(identity, target, WorkflowCommand::Approve)
            .await
    }

    pub async fn reject(
        &self,
        identity: &dyn IdentityProvider,
        target: ArticleRef,
    ) -> ApplicationResult<ArticleDto> {
        self.run_workflow(identity, target, WorkflowCommand::Reject)
            .await
    }

    pub async fn request_revision(
        &self,
        identity: &dyn IdentityProvider,
        command: RequestRevisionCommand,
    ) -> ApplicationResult<ArticleDto> {
        self.run_workflow(
            identity,
            command.target,
            WorkflowCommand::RequestRevision {
                feedback: command.feedback,
            },
        )
        .await
    }

    pub async fn start_revision(
        &self,
        identity: &dyn IdentityProvider,
        target: ArticleRef,
    ) -> ApplicationResult<ArticleDto> {
        self.run_workflow(identity, target, WorkflowCommand::StartRevision)
            .await
    }

    pub async fn finish_revision(
        &self,
        identity: &dyn IdentityProvider,
        target: ArticleRef,
    ) -> ApplicationResult<ArticleDto> {
        self.run_workflow(identity, target, WorkflowCommand::FinishRevision)
            .await
    }

    async fn run_workflow(
        &self,
        identity: &dyn IdentityProvider,
        target: ArticleRef,
        command: WorkflowCommand,
    ) -> ApplicationResult<ArticleDto> {
        let actor = identity.current_actor()?;
        let article = self.load(target).await?;
        let action = command.action();
        let grant = self.authorize(action, &actor, &article)?;

        let transition = self
            .engine
            .apply(&article, &grant, &command, self.clock.now())
            .map_err(|err| rejected(action, &actor, &article, err))?;

        self.commit(article.version, transition).await
    }
}
