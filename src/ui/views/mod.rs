pub mod case_briefing;
pub mod home;
pub mod quiz;
pub mod results;
pub mod tier_break;
