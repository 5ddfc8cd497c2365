// Resume Tailoring Engine: job description + resume → TailoredResume.
// Pure, synchronous heuristics; the HTTP handlers only validate and delegate.

pub mod bullets;
pub mod handlers;
pub mod keywords;
pub mod skills;
pub mod tailor;
