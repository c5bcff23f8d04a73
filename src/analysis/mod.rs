mod input;
mod normalize;
mod schema;

pub use input::{ImageSubmission, QuizAnswer, QuizSubmission};
pub use normalize::{normalize, parse_reply, strip_code_fences};
pub use schema::{
    ColorMood, FamousPerson, MbtiAnalysis, MbtiProfile, PERSONALITY_BASE_URL, SpiritAnimal,
    SpiritAnimalAnalysis, Validate, official_link,
};
