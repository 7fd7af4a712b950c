//! Analysis pipeline: extraction, section detection, ATS scoring, role
//! matching, JD matching, and the orchestration service.

pub mod ats;
pub mod extractor;
pub mod jd;
pub mod roles;
pub mod sections;
pub mod service;

pub use ats::{AtsBreakdown, AtsResult, AtsScorer};
pub use extractor::{ExtractionResult, SkillExtractor, SkillMention};
pub use jd::{JdMatchResult, JdMatcher};
pub use roles::{ConfidenceLevel, RoleMatch, RoleMatcher};
pub use sections::SectionPresence;
pub use service::{AnalysisReport, AnalysisService};
