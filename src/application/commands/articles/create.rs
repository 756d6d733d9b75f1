// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult, ports::identity::IdentityProvider},
    domain::article::{ArticleContent, ArticleEvent, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    pub primary_image: Option<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    body: Option<String>,
    primary_image: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn primary_image(mut self, image: impl Into<String>) -> Self {
        self.primary_image = Some(image.into());
        self
    }

    /// Drafts may start empty, so every field is optional here.
    pub fn build(self) -> CreateArticleCommand {
        CreateArticleCommand {
            title: self.title.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
            primary_image: self.primary_image.filter(|image| !image.trim().is_empty()),
        }
    }
}

impl ArticleCommandService {
    /// Creates a `DRAFT` owned by the acting principal, journalist or admin.
    pub async fn create_article(
        &self,
        identity: &dyn IdentityProvider,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let actor = identity.current_actor()?;
        let now = self.clock.now();

        let new_article = NewArticle {
            author_id: actor.id,
            content: ArticleContent::new(command.title, command.body, command.primary_image),
            created_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        ArticleEvent::Created {
            id: created.id,
            author_id: created.author_id,
            at: now,
        }
        .record();
        Ok(created.into())
    }
}
