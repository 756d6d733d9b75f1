use std::sync::Arc;

use crate::domain::article::{ArticleReadRepository, RoleGateway};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) gateway: RoleGateway,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self {
            read_repo,
            gateway: RoleGateway::new(),
        }
    }
}
