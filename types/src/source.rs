use std::fmt::Debug;

use async_trait::async_trait;

use crate::Question;

/// Supplies questions one at a time.
///
/// Resolving to `None` means no question can be delivered right now, either
/// because the supply ran out or because loading failed.
#[async_trait]
pub trait QuestionSource: Debug + Send {
    async fn request_next_question(&mut self) -> Option<Question>;
}
