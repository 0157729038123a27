use crate::application::ports::SlugGeneratorPort;
use crate::domain::tag::TagRepository;
use std::sync::Arc;

/// Write side for tags. Every path that persists a tag derives its slug from
/// the current name right before the repository call.
pub struct TagCommandService {
    pub(super) repo: Arc<dyn TagRepository>,
    pub(super) slugger: Arc<SlugGeneratorPort>,
}

impl TagCommandService {
    pub fn new(repo: Arc<dyn TagRepository>, slugger: Arc<SlugGeneratorPort>) -> Self {
        Self { repo, slugger }
    }
}
