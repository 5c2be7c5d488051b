pub mod brief;
pub mod input;
pub mod research;
pub mod result;

pub use brief::{Audience, Brief, BriefStyle, Compliance};
pub use input::{BriefParseInput, InputError, Placement};
pub use research::{ResearchResult, ResearchSource};
pub use result::{BriefParseResult, BriefSource};
