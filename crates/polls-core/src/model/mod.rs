mod question;

pub use question::{Choice, ChoiceId, Question, QuestionId};
