use super::{ArticleCommandService, ArticleRef, capability::rejected};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult, ports::identity::IdentityProvider},
    domain::article::{ArticleAction, ContentPatch},
};

pub struct UpdateArticleContentCommand {
    pub target: ArticleRef,
    pub title: Option<String>,
    pub body: Option<String>,
    pub primary_image: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_content(
        &self,
        identity: &dyn IdentityProvider,
        command: UpdateArticleContentCommand,
    ) -> ApplicationResult<ArticleDto> {
        let actor = identity.current_actor()?;
        let article = self.load(command.target).await?;
        let grant = self.authorize(ArticleAction::EditContent, &actor, &article)?;

        let patch = ContentPatch {
            title: command.title,
            body: command.body,
            primary_image: command.primary_image,
        };
        let transition = self
            .engine
            .edit_content(&article, &grant, patch, self.clock.now())
            .map_err(|err| rejected(ArticleAction::EditContent, &actor, &article, err))?;

        self.commit(article.version, transition).await
    }
}
