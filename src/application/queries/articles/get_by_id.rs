use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        ports::identity::IdentityProvider,
    },
    domain::article::{ArticleAction, ArticleId},
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        identity: &dyn IdentityProvider,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let actor = identity.current_actor()?;
        let id = ArticleId::new(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))?;
        self.gateway
            .authorize(ArticleAction::Read, &actor, &article)?;
        Ok(article.into())
    }
}
