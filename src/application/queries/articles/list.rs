use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        ports::identity::IdentityProvider,
    },
    domain::{
        article::ArticleStatus,
        user::UserId,
    },
};

pub struct ListArticlesByAuthorQuery {
    pub author_id: i64,
}

/// Moderation queues for admins; journalists only see their own articles.
pub struct ListArticlesByStatusQuery {
    pub status: ArticleStatus,
}

impl ArticleQueryService {
    pub async fn list_by_author(
        &self,
        identity: &dyn IdentityProvider,
        query: ListArticlesByAuthorQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let actor = identity.current_actor()?;
        let author_id = UserId::new(query.author_id)?;
        if !actor.role.is_admin() && actor.id != author_id {
            return Err(ApplicationError::unauthorized(
                "journalists can only list their own articles",
            ));
        }

        let articles = self.read_repo.list_by_author(author_id).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_status(
        &self,
        identity: &dyn IdentityProvider,
        query: ListArticlesByStatusQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let actor = identity.current_actor()?;
        let articles = self.read_repo.list_by_status(query.status).await?;
        Ok(articles
            .into_iter()
            .filter(|article| actor.role.is_admin() || article.is_authored_by(actor.id))
            .map(Into::into)
            .collect())
    }
}
