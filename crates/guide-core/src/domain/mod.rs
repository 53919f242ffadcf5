//! 가이드 카탈로그의 항목(Entry) 타입.

mod capital;
mod faq;
mod notification;
mod optimization;
mod referral;
mod step;
mod tab;
mod trading;
mod troubleshooting;
mod workflow;

pub use capital::*;
pub use faq::*;
pub use notification::*;
pub use optimization::*;
pub use referral::*;
pub use step::*;
pub use tab::*;
pub use trading::*;
pub use troubleshooting::*;
pub use workflow::*;
