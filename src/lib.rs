//! Ontbijtactie — confirmation mailer for breakfast reservation form submissions.

pub mod config;
pub mod error;
pub mod event;
pub mod mailer;
pub mod order;
pub mod processor;
pub mod render;
