//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and external systems.

pub mod account;
pub mod analysis;
pub mod export;
pub mod mail;

pub use account::AccountService;
pub use analysis::AnalysisService;
pub use export::ExportService;
pub use mail::{HttpMailer, LogMailer, MailMessage, MailService, Mailer};
