// tests/support/builders.rs
use super::mocks::fixed_now;
use editorial_core::domain::article::{
    AdminEditRequest, Article, ArticleContent, ArticleId, ArticleStatus, ArticleVersion,
    Feedback, NewArticle,
};
use editorial_core::domain::user::{Actor, UserId};

pub const AUTHOR_ID: i64 = 1;
pub const OTHER_JOURNALIST_ID: i64 = 2;
pub const ADMIN_ID: i64 = 99;

pub fn author() -> Actor {
    Actor::journalist(UserId(AUTHOR_ID))
}

pub fn other_journalist() -> Actor {
    Actor::journalist(UserId(OTHER_JOURNALIST_ID))
}

pub fn admin() -> Actor {
    Actor::admin(UserId(ADMIN_ID))
}

pub fn complete_content() -> ArticleContent {
    ArticleContent::new(
        "Overwintering citrus",
        "Keep pots above 5C and water sparingly.",
        Some("https://cdn.example/citrus.jpg".into()),
    )
}

/// Builds articles fixed at an arbitrary point in the workflow.
pub struct ArticleBuilder {
    id: i64,
    author_id: i64,
    content: ArticleContent,
    status: ArticleStatus,
    admin_edit_request: AdminEditRequest,
    feedback: Option<String>,
    version: i64,
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            author_id: AUTHOR_ID,
            content: complete_content(),
            status: ArticleStatus::Draft,
            admin_edit_request: AdminEditRequest::None,
            feedback: None,
            version: 1,
        }
    }
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn content(mut self, content: ArticleContent) -> Self {
        self.content = content;
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn edit_request(mut self, request: AdminEditRequest) -> Self {
        self.admin_edit_request = request;
        self
    }

    pub fn feedback(mut self, feedback: &str) -> Self {
        self.feedback = Some(feedback.into());
        self
    }

    pub fn version(mut self, version: i64) -> Self {
        self.version = version;
        self
    }

    pub fn build(self) -> Article {
        let mut article = NewArticle {
            author_id: UserId(self.author_id),
            content: self.content,
            created_at: fixed_now(),
        }
        .into_article(ArticleId(self.id));
        article.status = self.status;
        article.admin_edit_request = self.admin_edit_request;
        article.feedback = self
            .feedback
            .map(|f| Feedback::new(f).expect("non-empty feedback"));
        article.version = ArticleVersion::new(self.version).expect("positive version");
        article
    }
}
