pub mod article;
pub mod comment;

pub use article::{Article, ArticleChanges, NewArticle};
pub use comment::{Comment, NewComment};

/// Author attribution used when no identity cookie accompanies a submission.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";
