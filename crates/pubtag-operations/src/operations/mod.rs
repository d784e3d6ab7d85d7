mod publish;

pub use publish::{PublishOperation, PublishOutput, PublishPlan};
