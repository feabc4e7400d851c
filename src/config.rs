/// Public endpoint of the transactional email service.
pub const EMAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

const DEFAULT_SERVICE_ID: &str = "service_ko636jg";
const DEFAULT_TEMPLATE_ID: &str = "template_lzof8mf";
const DEFAULT_PUBLIC_KEY: &str = "c0zGOUPfRD-X1w8i-";

/// Tokens identifying the email service, template and account.
///
/// These are public by nature (they ship inside the wasm bundle) and are fixed
/// at compile time. Override them with `PORTFOLIO_EMAIL_SERVICE_ID`,
/// `PORTFOLIO_EMAIL_TEMPLATE_ID` and `PORTFOLIO_EMAIL_PUBLIC_KEY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }

    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("PORTFOLIO_EMAIL_SERVICE_ID").unwrap_or(DEFAULT_SERVICE_ID),
            option_env!("PORTFOLIO_EMAIL_TEMPLATE_ID").unwrap_or(DEFAULT_TEMPLATE_ID),
            option_env!("PORTFOLIO_EMAIL_PUBLIC_KEY").unwrap_or(DEFAULT_PUBLIC_KEY),
        )
    }

    pub fn endpoint(&self) -> &'static str {
        EMAIL_ENDPOINT
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
