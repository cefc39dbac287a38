//! Test doubles shared by the integration tests.

pub mod mock_lead_submitter;
pub mod mock_mail_relay;

#[allow(unused_imports)]
pub use mock_lead_submitter::MockLeadSubmitter;
#[allow(unused_imports)]
pub use mock_mail_relay::MockMailRelay;
